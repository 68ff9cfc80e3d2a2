use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Scale one channel to `value * level / full` with integer truncation.
///
/// `full` is the brightest decay weight; a level equal to `full` leaves
/// the channel untouched.
#[inline]
pub fn scale_channel(value: u8, level: u8, full: u8) -> u8 {
    if full == 0 {
        return 0;
    }
    (u16::from(value) * u16::from(level) / u16::from(full)) as u8
}

/// Dim a color by a decay weight relative to the brightest weight.
#[inline]
pub fn decayed(color: Rgb, level: u8, full: u8) -> Rgb {
    Rgb {
        r: scale_channel(color.r, level, full),
        g: scale_channel(color.g, level, full),
        b: scale_channel(color.b, level, full),
    }
}

/// Per-channel maximum of two colors.
///
/// Used when a slot appears more than once in a trail: the brighter
/// visit wins, a later entry never dims an already-bright slot.
#[inline]
pub fn max_channels(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.max(b.r),
        g: a.g.max(b.g),
        b: a.b.max(b.b),
    }
}
