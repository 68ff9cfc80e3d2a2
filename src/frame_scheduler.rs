//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripDriver;
use crate::driver::{RetryPolicy, set_led_with_retry};
use crate::engine::TrailEngine;

/// Default target frame rate (100 FPS, a 10 ms tick).
pub const DEFAULT_FPS: u32 = 100;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Number of LED writes emitted this frame (including dropped ones).
    pub writes: usize,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Runs the trail engine and writes its updates with bounded retry
/// - Returns timing info so the caller can sleep appropriately
///
/// A write whose retries are exhausted is dropped; the LED keeps its
/// previous color until a later frame changes it again.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(engine, driver);
///
/// loop {
///     device.poll_events(); // callback feeds the event channel
///     let result = scheduler.tick(Instant::now());
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: StripDriver,
    const LEDS: usize,
    const DEPTH: usize,
    const EVENT_CHANNEL_SIZE: usize,
> {
    output: O,
    engine: TrailEngine<'a, LEDS, DEPTH, EVENT_CHANNEL_SIZE>,
    retry: RetryPolicy,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: StripDriver, const LEDS: usize, const DEPTH: usize, const EVENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, LEDS, DEPTH, EVENT_CHANNEL_SIZE>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (100 FPS) and the default retry
    /// policy (3 attempts, 30 ms backoff).
    pub fn new(engine: TrailEngine<'a, LEDS, DEPTH, EVENT_CHANNEL_SIZE>, driver: O) -> Self {
        Self::with_frame_duration(engine, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        engine: TrailEngine<'a, LEDS, DEPTH, EVENT_CHANNEL_SIZE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            engine,
            retry: RetryPolicy::default(),
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Runs one engine tick
    /// 3. Writes each changed LED with bounded retry
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let updates = self.engine.tick();
        let writes = updates.len();
        for update in updates {
            if set_led_with_retry(&mut self.output, update, self.retry).is_err() {
                #[cfg(feature = "esp32-log")]
                println!("[FrameScheduler.tick] dropping write for led {}", update.index);
            }
        }

        // Calculate next frame deadline
        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            writes,
        }
    }

    /// Blank the whole strip, best-effort.
    ///
    /// Each write is retried independently; one exhausted write never
    /// prevents attempting the rest. Called at startup and during
    /// shutdown cleanup.
    pub fn blank(&mut self) {
        for update in self.engine.reset() {
            if set_led_with_retry(&mut self.output, update, self.retry).is_err() {
                #[cfg(feature = "esp32-log")]
                println!("[FrameScheduler.blank] dropping write for led {}", update.index);
            }
        }
    }

    /// Get a reference to the output driver.
    pub fn driver(&self) -> &O {
        &self.output
    }

    /// Release the engine and driver (e.g. to close the device on shutdown).
    pub fn into_parts(self) -> (TrailEngine<'a, LEDS, DEPTH, EVENT_CHANNEL_SIZE>, O) {
        (self.engine, self.output)
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &TrailEngine<'a, LEDS, DEPTH, EVENT_CHANNEL_SIZE> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut TrailEngine<'a, LEDS, DEPTH, EVENT_CHANNEL_SIZE> {
        &mut self.engine
    }
}
