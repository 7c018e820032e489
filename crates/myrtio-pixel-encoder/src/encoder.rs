//! Frame encoder - resumable state machine
//!
//! Streams a wire-order frame through a small symbol window:
//! - every call fills as much of the window as it can
//! - `MEM_FULL` means the window ran out, call again once the channel has
//!   room
//! - after the last data bit the reset symbol is appended and the frame is
//!   `COMPLETE`
//!
//! Progress is kept as a bit cursor into the frame, so resuming never
//! duplicates or skips a symbol, even when a byte is split between calls.
//! A call does bounded work, never blocks and never allocates, so it may run
//! in the refill path of the channel driver.

use core::ops::{BitOr, BitOrAssign};

use crate::symbol::PulseSymbol;
use crate::timing::{PulseTiming, TimingError, TimingTable};
use crate::translator::{ByteTranslator, SYMBOLS_PER_BYTE};

/// Flags reported by [`FrameEncoder::encode_frame`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeState(u8);

impl EncodeState {
    /// Nothing encoded yet
    pub const RESET: EncodeState = EncodeState(0);
    /// Frame data exhausted and reset symbol written
    pub const COMPLETE: EncodeState = EncodeState(1 << 0);
    /// Output window exhausted, call again later
    pub const MEM_FULL: EncodeState = EncodeState(1 << 1);

    /// All flags of `other` are set. Always true for [`EncodeState::RESET`],
    /// use [`EncodeState::is_reset`] to test for the empty state.
    pub const fn contains(self, other: EncodeState) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_reset(self) -> bool {
        self.0 == Self::RESET.0
    }

    pub const fn is_complete(self) -> bool {
        self.contains(Self::COMPLETE)
    }

    pub const fn is_mem_full(self) -> bool {
        self.contains(Self::MEM_FULL)
    }
}

impl BitOr for EncodeState {
    type Output = EncodeState;

    fn bitor(self, rhs: Self) -> Self::Output {
        EncodeState(self.0 | rhs.0)
    }
}

impl BitOrAssign for EncodeState {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Encoder phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderPhase {
    /// No frame submitted
    Idle,
    /// Translating frame bytes
    Encoding,
    /// Frame bytes consumed, reset symbol pending
    AppendingReset,
    /// Reset symbol written
    Done,
}

/// WS2812 frame encoder
///
/// Owns the byte translator and the reset symbol. One encoder serves one
/// transmission at a time; call [`FrameEncoder::reset`] before the next one.
#[derive(Debug, Clone)]
pub struct FrameEncoder {
    translator: ByteTranslator,
    reset_symbol: PulseSymbol,
    phase: EncoderPhase,
    /// Index of the next data symbol (one per frame bit)
    cursor: usize,
}

impl FrameEncoder {
    /// Create an encoder from tick timings.
    ///
    /// Invalid timings are rejected here instead of producing an out-of-tolerance
    /// waveform later.
    pub fn new(bit0: PulseTiming, bit1: PulseTiming, reset_ticks: u16) -> Result<Self, TimingError> {
        let table = TimingTable::new(bit0, bit1, reset_ticks)?;
        Ok(Self::from_table(&table))
    }

    pub fn from_table(table: &TimingTable) -> Self {
        Self {
            translator: ByteTranslator::new(table),
            reset_symbol: table.reset(),
            phase: EncoderPhase::Idle,
            cursor: 0,
        }
    }

    pub fn phase(&self) -> EncoderPhase {
        self.phase
    }

    pub fn translator(&self) -> &ByteTranslator {
        &self.translator
    }

    pub fn reset_symbol(&self) -> PulseSymbol {
        self.reset_symbol
    }

    /// Data symbols emitted so far for the current frame
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Forget the current frame and wait for the next one
    pub fn reset(&mut self) {
        self.phase = EncoderPhase::Idle;
        self.cursor = 0;
    }

    /// Total symbols a frame of `frame_len` bytes encodes to
    pub const fn frame_symbols(frame_len: usize) -> usize {
        frame_len * SYMBOLS_PER_BYTE + 1
    }

    /// Encode the next part of `frame` into `out`.
    ///
    /// `out.len()` is the number of symbols the channel can take right now.
    /// `frame` must be the same slice on every call of one transmission.
    /// Returns the number of symbols written and the session flags.
    pub fn encode_frame(&mut self, frame: &[u8], out: &mut [PulseSymbol]) -> (usize, EncodeState) {
        let mut written = 0;

        if self.phase == EncoderPhase::Idle {
            self.phase = EncoderPhase::Encoding;
            self.cursor = 0;
        }

        if self.phase == EncoderPhase::Encoding {
            let total = frame.len() * SYMBOLS_PER_BYTE;
            debug_assert!(self.cursor <= total, "frame changed during transmission");

            while self.cursor < total {
                if written == out.len() {
                    return (written, EncodeState::MEM_FULL);
                }
                let bit = self.cursor % SYMBOLS_PER_BYTE;
                let symbols = self.translator.encode(frame[self.cursor / SYMBOLS_PER_BYTE]);
                let take = (SYMBOLS_PER_BYTE - bit).min(out.len() - written);

                out[written..written + take].copy_from_slice(&symbols[bit..bit + take]);
                written += take;
                self.cursor += take;
            }
            self.phase = EncoderPhase::AppendingReset;
        }

        if self.phase == EncoderPhase::AppendingReset {
            if written == out.len() {
                return (written, EncodeState::MEM_FULL);
            }
            out[written] = self.reset_symbol;
            written += 1;
            self.phase = EncoderPhase::Done;
        }

        (written, EncodeState::COMPLETE)
    }
}
