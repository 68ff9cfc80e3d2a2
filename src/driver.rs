//! Bounded-retry LED writes.
//!
//! Strip writes can fail transiently (timeout-like). A failed write is
//! retried a fixed number of times with a fixed backoff; after that the
//! write is given up and the LED keeps its previous color until a later
//! frame changes it again. Exhaustion is returned as a value so the
//! caller decides whether to drop it — a visual glitch is acceptable,
//! crashing the control loop is not.

use embassy_time::Duration;

use crate::StripDriver;
use crate::renderer::LedUpdate;

/// How often and how patiently a failed write is retried.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub attempts: u8,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff: Duration::from_millis(30),
        }
    }
}

/// All retry attempts for one write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetriesExhausted;

/// Write one LED, retrying per `policy`.
///
/// Waits `policy.backoff` after each failed attempt. The returned error
/// is explicitly allowed to be discarded by the caller.
pub fn set_led_with_retry<D: StripDriver>(
    driver: &mut D,
    update: LedUpdate,
    policy: RetryPolicy,
) -> Result<(), RetriesExhausted> {
    for _ in 0..policy.attempts {
        if driver.set_led(update.index, update.color).is_ok() {
            return Ok(());
        }
        driver.delay(policy.backoff);
    }
    Err(RetriesExhausted)
}
