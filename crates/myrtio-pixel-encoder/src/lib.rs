#![cfg_attr(not(test), no_std)]

//! Pixel Waveform Encoder
//!
//! Turns WS2812-family color data into the pulse train expected by the LED
//! chain, in a form that an RMT-style pulse peripheral can clock out.
//!
//! Architecture layers:
//! - `timing` - Pulse timing table (bit-0, bit-1 and reset symbols)
//! - `symbol` - Pulse symbol representation
//! - `translator` - Byte to pulse translation, MSB first
//! - `encoder` - Resumable frame encoder state machine
//! - `channel` - Channel driver contract and the refill loop
//! - `strip` - Caller-facing strip context (`set_led_colors`)
//!
//! The strip is generic over [`SymbolChannel`], allowing different hardware
//! backends and host-side test doubles.

extern crate alloc;

pub mod channel;
pub mod color;
pub mod encoder;
pub mod strip;
pub mod symbol;
pub mod timing;
pub mod translator;

// Channel exports
pub use channel::{REFILL_CHUNK, SymbolChannel, TransmitError, transmit_frame};

// Color exports
pub use color::{ColorOrder, Rgb};

// Encoder exports
pub use encoder::{EncodeState, EncoderPhase, FrameEncoder};

// Strip exports
pub use strip::{LedError, PixelStrip};

// Timing exports
pub use symbol::{Level, MAX_DURATION, PulseSymbol};
pub use timing::{ChipTiming, PulseTiming, TimingError, TimingTable};
pub use translator::ByteTranslator;
