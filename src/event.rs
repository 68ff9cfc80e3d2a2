//! Sensor event model.
//!
//! The device callback delivers events of several kinds; only tilt
//! samples feed the animation pipeline. Modeling the kinds as an enum
//! lets the engine match on the variant it cares about and silently
//! discard the rest.

/// Raw accelerometer reading in device units.
///
/// Produced by the host's device callback, consumed immediately by
/// [`TiltFilter`](crate::filter::TiltFilter). Values are not sanitized;
/// the slot mapper clamps whatever comes out of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl TiltSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One event delivered by the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorEvent {
    /// Accelerometer sample
    Tilt(TiltSample),
    /// Decoded infrared frame
    Infrared { code: u32 },
    /// Button state change
    Button { index: u8, pressed: bool },
}
