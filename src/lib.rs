#![no_std]

pub mod channel;
pub mod color;
pub mod cursor;
pub mod driver;
pub mod engine;
pub mod event;
pub mod filter;
pub mod frame_scheduler;
pub mod mapper;
pub mod renderer;
pub mod trail;

pub use channel::{EventChannel, EventReceiver, EventSender};
pub use cursor::Cursor;
pub use driver::{RetriesExhausted, RetryPolicy, set_led_with_retry};
pub use engine::{TrailEngine, TrailEngineConfig};
pub use event::{SensorEvent, TiltSample};
pub use filter::TiltFilter;
pub use frame_scheduler::FrameScheduler;
pub use mapper::SlotMapper;
pub use renderer::{LedUpdate, TrailRenderer};
pub use trail::{Trail, TrailTracker};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait. Writes address a single LED
/// and may fail transiently; callers wrap them with a bounded retry and
/// are allowed to drop a write entirely (the slot is corrected on a
/// later frame once its target color changes again).
pub trait StripDriver {
    /// Platform-specific write error
    type Error;

    /// Set one LED to the given color
    fn set_led(&mut self, index: u8, color: Rgb) -> Result<(), Self::Error>;

    /// Block for the given duration (used for retry backoff)
    fn delay(&mut self, duration: Duration);
}
