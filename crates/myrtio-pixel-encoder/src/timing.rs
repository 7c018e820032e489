//! Pulse timing table
//!
//! Converts the chip datasheet timings into tick-quantized symbol templates
//! for a given channel resolution, and refuses any table whose quantization
//! error exceeds the configured tolerance.
//!
//! Reference configuration: 10 MHz channel clock (0.1 µs per tick),
//! bit-0 = 4 ticks high / 8 ticks low, bit-1 = 8 ticks high / 4 ticks low,
//! reset = 500 ticks (50 µs).

use crate::symbol::{MAX_DURATION, PulseSymbol};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Error type for timing table construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingError {
    /// Channel resolution is zero
    ZeroResolution,
    /// A half-period is zero ticks long
    ZeroDuration,
    /// A half-period does not fit the symbol duration field
    DurationOverflow,
    /// Bit-0 and bit-1 symbols are identical
    IndistinguishableBits,
    /// Reset pulse is not longer than a bit period
    ResetTooShort,
    /// Quantized timing drifts past the chip tolerance
    OutOfTolerance,
}

/// High/low durations of a bit symbol, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    pub high: u16,
    pub low: u16,
}

impl PulseTiming {
    pub const fn new(high: u16, low: u16) -> Self {
        Self { high, low }
    }

    /// Total bit period in ticks
    pub const fn period(&self) -> u32 {
        self.high as u32 + self.low as u32
    }

    pub const fn symbol(&self) -> PulseSymbol {
        PulseSymbol::high_low(self.high, self.low)
    }

    fn validate(&self) -> Result<(), TimingError> {
        check_duration(self.high)?;
        check_duration(self.low)
    }
}

/// Datasheet timings of an LED chip, in nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipTiming {
    pub t0h_ns: u32,
    pub t0l_ns: u32,
    pub t1h_ns: u32,
    pub t1l_ns: u32,
    /// Minimum low time that latches the chain
    pub reset_ns: u32,
    /// Allowed deviation of every half-period and bit period
    pub tolerance_ns: u32,
}

impl ChipTiming {
    pub const WS2812B: ChipTiming = ChipTiming {
        t0h_ns: 400,
        t0l_ns: 850,
        t1h_ns: 800,
        t1l_ns: 450,
        reset_ns: 50_000,
        tolerance_ns: 150,
    };

    pub const WS2812: ChipTiming = ChipTiming {
        t0h_ns: 350,
        t0l_ns: 800,
        t1h_ns: 700,
        t1l_ns: 600,
        reset_ns: 50_000,
        tolerance_ns: 150,
    };

    /// Override the allowed deviation
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance_ns: u32) -> Self {
        self.tolerance_ns = tolerance_ns;
        self
    }
}

/// Symbol templates for bit-0, bit-1 and the reset pulse.
///
/// Built once at startup, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingTable {
    bit0: PulseSymbol,
    bit1: PulseSymbol,
    reset: PulseSymbol,
}

impl TimingTable {
    /// Build a table from tick durations
    pub fn new(bit0: PulseTiming, bit1: PulseTiming, reset_ticks: u16) -> Result<Self, TimingError> {
        bit0.validate()?;
        bit1.validate()?;
        check_duration(reset_ticks)?;
        if bit0 == bit1 {
            return Err(TimingError::IndistinguishableBits);
        }
        if u32::from(reset_ticks) <= bit0.period().max(bit1.period()) {
            return Err(TimingError::ResetTooShort);
        }

        Ok(Self {
            bit0: bit0.symbol(),
            bit1: bit1.symbol(),
            reset: PulseSymbol::reset(reset_ticks),
        })
    }

    /// Quantize chip timings to a channel running at `resolution_hz`.
    ///
    /// Half-periods round to the nearest tick, the reset pulse rounds up.
    pub fn from_chip(resolution_hz: u32, chip: &ChipTiming) -> Result<Self, TimingError> {
        if resolution_hz == 0 {
            return Err(TimingError::ZeroResolution);
        }
        let hz = u64::from(resolution_hz);

        let bit0 = PulseTiming::new(
            nearest_ticks(chip.t0h_ns, hz)?,
            nearest_ticks(chip.t0l_ns, hz)?,
        );
        let bit1 = PulseTiming::new(
            nearest_ticks(chip.t1h_ns, hz)?,
            nearest_ticks(chip.t1l_ns, hz)?,
        );
        let reset_ticks = ceil_ticks(chip.reset_ns, hz)?;

        let tolerance = u64::from(chip.tolerance_ns);
        let checks = [
            (u32::from(bit0.high), u64::from(chip.t0h_ns)),
            (u32::from(bit0.low), u64::from(chip.t0l_ns)),
            (u32::from(bit1.high), u64::from(chip.t1h_ns)),
            (u32::from(bit1.low), u64::from(chip.t1l_ns)),
            (bit0.period(), u64::from(chip.t0h_ns) + u64::from(chip.t0l_ns)),
            (bit1.period(), u64::from(chip.t1h_ns) + u64::from(chip.t1l_ns)),
        ];
        for (ticks, target_ns) in checks {
            if !within_tolerance(ticks, target_ns, hz, tolerance) {
                return Err(TimingError::OutOfTolerance);
            }
        }

        Self::new(bit0, bit1, reset_ticks)
    }

    pub fn bit0(&self) -> PulseSymbol {
        self.bit0
    }

    pub fn bit1(&self) -> PulseSymbol {
        self.bit1
    }

    pub fn reset(&self) -> PulseSymbol {
        self.reset
    }
}

fn check_duration(ticks: u16) -> Result<(), TimingError> {
    match ticks {
        0 => Err(TimingError::ZeroDuration),
        t if t > MAX_DURATION => Err(TimingError::DurationOverflow),
        _ => Ok(()),
    }
}

fn nearest_ticks(ns: u32, hz: u64) -> Result<u16, TimingError> {
    to_duration((u64::from(ns) * hz + NANOS_PER_SECOND / 2) / NANOS_PER_SECOND)
}

fn ceil_ticks(ns: u32, hz: u64) -> Result<u16, TimingError> {
    to_duration((u64::from(ns) * hz).div_ceil(NANOS_PER_SECOND))
}

fn to_duration(ticks: u64) -> Result<u16, TimingError> {
    match u16::try_from(ticks) {
        Ok(0) => Err(TimingError::ZeroDuration),
        Ok(t) if t <= MAX_DURATION => Ok(t),
        _ => Err(TimingError::DurationOverflow),
    }
}

/// `|ticks / hz - target| <= tolerance`, kept in integer nanosecond-hertz units
fn within_tolerance(ticks: u32, target_ns: u64, hz: u64, tolerance_ns: u64) -> bool {
    let actual = u64::from(ticks) * NANOS_PER_SECOND;
    let target = target_ns * hz;
    actual.abs_diff(target) <= tolerance_ns * hz
}
