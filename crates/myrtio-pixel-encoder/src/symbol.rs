//! Pulse symbol representation
//!
//! A pulse symbol is one RMT item: two half-periods, each with a logic level
//! and a duration in ticks of the channel clock.

/// Largest duration a single half-period can hold (15-bit RMT field)
pub const MAX_DURATION: u16 = 0x7FFF;

/// Logic level of a half-period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Low,
    High,
}

/// One encoded bit-time on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PulseSymbol {
    pub level0: Level,
    pub duration0: u16,
    pub level1: Level,
    pub duration1: u16,
}

impl PulseSymbol {
    pub const fn new(level0: Level, duration0: u16, level1: Level, duration1: u16) -> Self {
        Self {
            level0,
            duration0,
            level1,
            duration1,
        }
    }

    /// High for `high` ticks, then low for `low` ticks
    pub const fn high_low(high: u16, low: u16) -> Self {
        Self::new(Level::High, high, Level::Low, low)
    }

    /// Long low level that latches the chain.
    ///
    /// The zero-length second half doubles as the RMT end marker.
    pub const fn reset(ticks: u16) -> Self {
        Self::new(Level::Low, ticks, Level::Low, 0)
    }

    /// Total duration in ticks
    pub const fn period(&self) -> u32 {
        self.duration0 as u32 + self.duration1 as u32
    }

    /// Whether this symbol stops the transmitter
    pub const fn is_end_marker(&self) -> bool {
        self.duration0 == 0 || self.duration1 == 0
    }
}
