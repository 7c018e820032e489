//! Wire color order
//!
//! Colors come in as RGB. The chips expect their own channel order on the
//! wire, so every color is reordered before it reaches the encoder.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Bytes per LED on the wire
pub const BYTES_PER_LED: usize = 3;

/// Channel order expected by the LED chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    /// WS2812 / WS2812B / SK6812
    #[default]
    Grb,
    /// WS2811 strips wired as RGB
    Rgb,
}

impl ColorOrder {
    /// Color bytes in wire order
    #[inline]
    pub const fn to_wire(self, color: Rgb) -> [u8; BYTES_PER_LED] {
        match self {
            ColorOrder::Grb => [color.g, color.r, color.b],
            ColorOrder::Rgb => [color.r, color.g, color.b],
        }
    }
}
