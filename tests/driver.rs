mod tests {
    use embassy_time::Duration;
    use tilt_trail::{
        LedUpdate, RetriesExhausted, RetryPolicy, Rgb, StripDriver, set_led_with_retry,
    };

    /// Driver that fails its first `failures` writes, then succeeds.
    struct FlakyDriver {
        failures: u32,
        writes: Vec<(u8, Rgb)>,
        delays: Vec<Duration>,
    }

    impl FlakyDriver {
        fn failing(failures: u32) -> Self {
            Self {
                failures,
                writes: Vec::new(),
                delays: Vec::new(),
            }
        }
    }

    impl StripDriver for FlakyDriver {
        type Error = ();

        fn set_led(&mut self, index: u8, color: Rgb) -> Result<(), ()> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(());
            }
            self.writes.push((index, color));
            Ok(())
        }

        fn delay(&mut self, duration: Duration) {
            self.delays.push(duration);
        }
    }

    const TEAL: Rgb = Rgb { r: 0, g: 25, b: 25 };
    const UPDATE: LedUpdate = LedUpdate { index: 2, color: TEAL };

    #[test]
    fn test_first_attempt_succeeds_without_backoff() {
        let mut driver = FlakyDriver::failing(0);
        let result = set_led_with_retry(&mut driver, UPDATE, RetryPolicy::default());
        assert_eq!(result, Ok(()));
        assert_eq!(driver.writes, [(2, TEAL)]);
        assert!(driver.delays.is_empty());
    }

    #[test]
    fn test_transient_failure_recovers() {
        let mut driver = FlakyDriver::failing(2);
        let result = set_led_with_retry(&mut driver, UPDATE, RetryPolicy::default());
        assert_eq!(result, Ok(()));
        assert_eq!(driver.writes, [(2, TEAL)]);
        // One backoff per failed attempt
        assert_eq!(
            driver.delays,
            [Duration::from_millis(30), Duration::from_millis(30)]
        );
    }

    #[test]
    fn test_exhaustion_is_a_discardable_error() {
        let mut driver = FlakyDriver::failing(3);
        let result = set_led_with_retry(&mut driver, UPDATE, RetryPolicy::default());
        assert_eq!(result, Err(RetriesExhausted));
        assert!(driver.writes.is_empty());
        assert_eq!(driver.delays.len(), 3);
    }

    #[test]
    fn test_custom_policy() {
        let policy = RetryPolicy {
            attempts: 1,
            backoff: Duration::from_millis(5),
        };
        let mut driver = FlakyDriver::failing(1);
        assert_eq!(
            set_led_with_retry(&mut driver, UPDATE, policy),
            Err(RetriesExhausted)
        );
        assert_eq!(driver.delays, [Duration::from_millis(5)]);
    }
}
