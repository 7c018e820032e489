//! Byte to pulse translation
//!
//! WS2812-family chips shift data in most-significant bit first. Reversing
//! the order silently produces wrong colors, so the order is fixed here.

use crate::symbol::PulseSymbol;
use crate::timing::TimingTable;

/// Number of symbols produced per byte
pub const SYMBOLS_PER_BYTE: usize = 8;

/// Stateless byte translator built from a timing table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteTranslator {
    bit0: PulseSymbol,
    bit1: PulseSymbol,
}

impl ByteTranslator {
    pub fn new(table: &TimingTable) -> Self {
        Self {
            bit0: table.bit0(),
            bit1: table.bit1(),
        }
    }

    /// Symbol for a single bit
    #[inline]
    pub fn symbol(&self, bit: bool) -> PulseSymbol {
        if bit { self.bit1 } else { self.bit0 }
    }

    /// Encode one byte into 8 symbols, MSB first
    #[inline]
    pub fn encode(&self, byte: u8) -> [PulseSymbol; SYMBOLS_PER_BYTE] {
        core::array::from_fn(|i| self.symbol(byte & (0x80 >> i) != 0))
    }
}
