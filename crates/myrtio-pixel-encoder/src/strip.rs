//! Pixel strip - caller-facing context
//!
//! Owns the channel driver and the frame encoder. Each refresh reorders the
//! colors into a transient wire-order frame, streams it and frees it before
//! returning. A refresh is all-or-nothing: when the frame cannot be built,
//! nothing is sent and the LEDs keep their last colors.

use alloc::vec::Vec;

use log::trace;
use smart_leds::SmartLedsWrite;

use crate::channel::{SymbolChannel, TransmitError, transmit_frame};
use crate::color::{BYTES_PER_LED, ColorOrder, Rgb};
use crate::encoder::FrameEncoder;

/// Default upper bound for a single refresh
pub const DEFAULT_MAX_LEDS: usize = 256;

/// Error type for the strip operations
#[derive(Debug, PartialEq, Eq)]
pub enum LedError<E> {
    /// More colors than the strip is configured for
    TooManyLeds,
    /// Frame buffer could not be allocated, refresh skipped
    OutOfMemory,
    /// Channel accepted no symbols, even after a flush
    Stalled,
    /// Channel driver failure
    Channel(E),
}

impl<E> From<TransmitError<E>> for LedError<E> {
    fn from(err: TransmitError<E>) -> Self {
        match err {
            TransmitError::Stalled => LedError::Stalled,
            TransmitError::Channel(err) => LedError::Channel(err),
        }
    }
}

/// LED strip bound to one pulse channel
pub struct PixelStrip<C> {
    channel: C,
    encoder: FrameEncoder,
    order: ColorOrder,
    max_leds: usize,
}

impl<C> PixelStrip<C>
where
    C: SymbolChannel,
{
    pub fn new(channel: C, encoder: FrameEncoder) -> Self {
        Self {
            channel,
            encoder,
            order: ColorOrder::default(),
            max_leds: DEFAULT_MAX_LEDS,
        }
    }

    #[must_use]
    pub fn with_color_order(mut self, order: ColorOrder) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_max_leds(mut self, max_leds: usize) -> Self {
        self.max_leds = max_leds;
        self
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn encoder(&self) -> &FrameEncoder {
        &self.encoder
    }

    /// Send one color per LED, first color to the first LED in the chain
    pub fn set_led_colors(&mut self, colors: &[Rgb]) -> Result<(), LedError<C::Error>> {
        if colors.len() > self.max_leds {
            return Err(LedError::TooManyLeds);
        }

        let mut frame = Vec::new();
        frame
            .try_reserve_exact(colors.len() * BYTES_PER_LED)
            .map_err(|_| LedError::OutOfMemory)?;
        for color in colors {
            frame.extend_from_slice(&self.order.to_wire(*color));
        }

        self.transmit(&frame)
    }

    fn transmit(&mut self, frame: &[u8]) -> Result<(), LedError<C::Error>> {
        let symbols = transmit_frame(&mut self.encoder, frame, &mut self.channel)?;
        trace!("strip: sent {} bytes as {} symbols", frame.len(), symbols);
        Ok(())
    }
}

impl<C> SmartLedsWrite for PixelStrip<C>
where
    C: SymbolChannel,
{
    type Error = LedError<C::Error>;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let mut frame = Vec::new();
        for (index, color) in iterator.into_iter().enumerate() {
            if index >= self.max_leds {
                return Err(LedError::TooManyLeds);
            }
            frame
                .try_reserve(BYTES_PER_LED)
                .map_err(|_| LedError::OutOfMemory)?;
            frame.extend_from_slice(&self.order.to_wire(color.into()));
        }

        self.transmit(&frame)
    }
}
