//! Channel driver abstraction layer
//!
//! The encoder only reasons about "how many symbols fit right now". The
//! channel owns the hardware queue and tells when the line went idle.

use crate::encoder::FrameEncoder;
use crate::symbol::PulseSymbol;

/// Largest window handed to the encoder per call (one RMT memory block)
pub const REFILL_CHUNK: usize = 64;

/// Abstract pulse channel
///
/// Implement this trait to support different pulse peripherals.
pub trait SymbolChannel {
    type Error;

    /// Symbols the channel accepts right now without blocking
    fn free_symbols(&self) -> usize;

    /// Queue symbols behind the ones already queued.
    ///
    /// Never called with more than [`SymbolChannel::free_symbols`] symbols.
    fn queue(&mut self, symbols: &[PulseSymbol]) -> Result<(), Self::Error>;

    /// Clock queued symbols out, return once they physically left the pin.
    ///
    /// Afterwards [`SymbolChannel::free_symbols`] must be non-zero, otherwise
    /// [`transmit_frame`] gives up with [`TransmitError::Stalled`].
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Error type for [`transmit_frame`]
#[derive(Debug, PartialEq, Eq)]
pub enum TransmitError<E> {
    /// Channel has no room even after a flush
    Stalled,
    /// Channel driver failure
    Channel(E),
}

/// Drive one frame through `channel`.
///
/// The encoder is re-invoked every time the channel frees room, until the
/// reset symbol is queued. Returns after the whole frame has been clocked
/// out. Transmissions through one channel never overlap.
pub fn transmit_frame<C>(
    encoder: &mut FrameEncoder,
    frame: &[u8],
    channel: &mut C,
) -> Result<usize, TransmitError<C::Error>>
where
    C: SymbolChannel,
{
    let mut window = [PulseSymbol::default(); REFILL_CHUNK];
    let mut total = 0;

    encoder.reset();
    loop {
        let mut free = channel.free_symbols().min(REFILL_CHUNK);
        if free == 0 {
            // Backpressure
            channel.flush().map_err(TransmitError::Channel)?;
            free = channel.free_symbols().min(REFILL_CHUNK);
            if free == 0 {
                return Err(TransmitError::Stalled);
            }
        }

        let (written, state) = encoder.encode_frame(frame, &mut window[..free]);
        channel.queue(&window[..written]).map_err(TransmitError::Channel)?;
        total += written;

        if state.is_complete() {
            break;
        }
    }
    channel.flush().map_err(TransmitError::Channel)?;

    Ok(total)
}
