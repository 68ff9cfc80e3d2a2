//! Exponential smoothing of the raw tilt stream.

use crate::event::TiltSample;

/// Low-pass filtered accelerometer state.
///
/// Holds the most recently integrated value for each axis. Integrated
/// once per received sample, independent of the render tick rate, and
/// never reset during a session. Inputs are not sanitized: NaN or
/// infinite samples propagate and are clamped downstream by the slot
/// mapper.
#[derive(Debug, Clone)]
pub struct TiltFilter {
    x: f32,
    y: f32,
    z: f32,
    smoothing: f32,
}

impl TiltFilter {
    /// Create a filter at rest (gravity on the z axis).
    ///
    /// `smoothing` is the exponential smoothing factor in `(0, 1)`;
    /// higher values track the raw signal more closely.
    pub const fn new(smoothing: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 1.0,
            smoothing,
        }
    }

    /// Fold one raw sample into the filtered state.
    pub fn integrate(&mut self, sample: TiltSample) {
        self.x = lerp(self.x, sample.x, self.smoothing);
        self.y = lerp(self.y, sample.y, self.smoothing);
        self.z = lerp(self.z, sample.z, self.smoothing);
    }

    /// Filtered tilt along the axis driving the cursor.
    pub const fn x(&self) -> f32 {
        self.x
    }

    pub const fn y(&self) -> f32 {
        self.y
    }

    pub const fn z(&self) -> f32 {
        self.z
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
