#![allow(clippy::unreadable_literal)]

use myrtio_pixel_encoder::{ChipTiming, ColorOrder, Rgb};

/// Upper bound for the strip length, sizes the RMT staging buffer
pub(crate) const MAX_LED_COUNT: usize = 64;

pub(crate) struct LightConfig {
    pub led_count: usize,
    pub color_order: ColorOrder,
}

pub(crate) struct RmtConfig {
    pub source_mhz: u32,
    pub clk_divider: u8,
    /// Frames waiting for the LED task
    pub queue_depth: usize,
}

impl RmtConfig {
    /// Channel tick rate after the divider
    pub(crate) const fn resolution_hz(&self) -> u32 {
        self.source_mhz * 1_000_000 / self.clk_divider as u32
    }
}

pub(crate) struct CycleConfig {
    pub period_ms: u64,
}

/// Palette color with its application-level brightness (0-255)
pub(crate) struct PaletteEntry {
    pub name: &'static str,
    pub color: Rgb,
    pub brightness: u8,
}

pub(crate) const LIGHT: LightConfig = LightConfig {
    led_count: 1,
    #[cfg(not(feature = "rgb-order"))]
    color_order: ColorOrder::Grb,
    #[cfg(feature = "rgb-order")]
    color_order: ColorOrder::Rgb,
};

// 80 MHz / 8 = 10 MHz, 0.1 µs per tick
pub(crate) const RMT: RmtConfig = RmtConfig {
    source_mhz: 80,
    clk_divider: 8,
    queue_depth: 4,
};

pub(crate) const TIMING: ChipTiming = ChipTiming::WS2812B;

pub(crate) const CYCLE: CycleConfig = CycleConfig { period_ms: 1000 };

pub(crate) const PALETTE: [PaletteEntry; 8] = [
    PaletteEntry {
        name: "red",
        color: Rgb::new(255, 0, 0),
        brightness: 25,
    },
    PaletteEntry {
        name: "green",
        color: Rgb::new(0, 255, 0),
        brightness: 25,
    },
    PaletteEntry {
        name: "blue",
        color: Rgb::new(0, 0, 255),
        brightness: 25,
    },
    PaletteEntry {
        name: "yellow",
        color: Rgb::new(255, 51, 0),
        brightness: 127,
    },
    PaletteEntry {
        name: "purple",
        color: Rgb::new(255, 0, 51),
        brightness: 127,
    },
    PaletteEntry {
        name: "cyan",
        color: Rgb::new(0, 255, 255),
        brightness: 25,
    },
    PaletteEntry {
        name: "white",
        color: Rgb::new(255, 255, 255),
        brightness: 25,
    },
    PaletteEntry {
        name: "off",
        color: Rgb::new(0, 0, 0),
        brightness: 0,
    },
];

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO48
    };
}
