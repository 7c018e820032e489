use esp_hal::{
    Blocking,
    gpio::{Level as PinLevel, interconnect::PeripheralOutput},
    peripherals::RMT,
    rmt::{Channel, Error as RmtError, PulseCode, Rmt, Tx, TxChannelConfig, TxChannelCreator},
    time::Rate,
};

use log::error;
use myrtio_pixel_encoder::{Level, PulseSymbol, SymbolChannel};

use crate::infrastructure::config;

/// Error type for the RMT channel
#[derive(Debug)]
pub(crate) enum RmtChannelError {
    /// Peripheral rejected or aborted the transmission
    Rmt(RmtError),
    /// More symbols queued than the staging buffer holds
    Overflow,
    /// Channel was lost by an earlier failed transmission.
    ///
    /// Terminal: every later flush fails the same way until reboot.
    Unavailable,
}

/// RMT transmit channel behind the [`SymbolChannel`] contract
///
/// Symbols are staged in a static buffer and clocked out on flush. The
/// peripheral refills its own memory blocks from that buffer, so a frame that
/// fits the buffer leaves the pin without gaps.
pub(crate) struct RmtSymbolChannel<'d, const N: usize> {
    channel: Option<Channel<'d, Blocking, Tx>>,
    buffer: &'d mut [PulseCode; N],
    len: usize,
}

impl<'d, const N: usize> RmtSymbolChannel<'d, N> {
    /// Configure RMT channel 0 as an idle-low transmitter on `pin`
    pub(crate) fn new<O>(
        rmt: RMT<'d>,
        pin: O,
        buffer: &'d mut [PulseCode; N],
    ) -> Result<Self, RmtChannelError>
    where
        O: PeripheralOutput<'d>,
    {
        let rmt =
            Rmt::new(rmt, Rate::from_mhz(config::RMT.source_mhz)).map_err(RmtChannelError::Rmt)?;
        let tx_config = TxChannelConfig::default()
            .with_clk_divider(config::RMT.clk_divider)
            .with_idle_output_level(PinLevel::Low)
            .with_idle_output(true)
            .with_carrier_modulation(false);
        let channel = rmt
            .channel0
            .configure_tx(pin, tx_config)
            .map_err(RmtChannelError::Rmt)?;

        Ok(Self {
            channel: Some(channel),
            buffer,
            len: 0,
        })
    }
}

impl<const N: usize> SymbolChannel for RmtSymbolChannel<'_, N> {
    type Error = RmtChannelError;

    fn free_symbols(&self) -> usize {
        N - self.len
    }

    fn queue(&mut self, symbols: &[PulseSymbol]) -> Result<(), Self::Error> {
        let end = self.len + symbols.len();
        let slots = self
            .buffer
            .get_mut(self.len..end)
            .ok_or(RmtChannelError::Overflow)?;
        for (slot, symbol) in slots.iter_mut().zip(symbols) {
            *slot = pulse_code(*symbol);
        }
        self.len = end;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.len == 0 {
            return Ok(());
        }
        let len = core::mem::replace(&mut self.len, 0);
        let channel = self.channel.take().ok_or(RmtChannelError::Unavailable)?;

        // A rejected transmit keeps the channel, the strip stays dark from here
        let transaction = channel.transmit(&self.buffer[..len]).map_err(|err| {
            error!("rmt: transmit rejected ({:?}), channel lost until reboot", err);
            RmtChannelError::Rmt(err)
        })?;
        match transaction.wait() {
            Ok(channel) => {
                self.channel = Some(channel);
                Ok(())
            }
            Err((err, channel)) => {
                self.channel = Some(channel);
                Err(RmtChannelError::Rmt(err))
            }
        }
    }
}

fn pulse_code(symbol: PulseSymbol) -> PulseCode {
    PulseCode::new(
        pin_level(symbol.level0),
        symbol.duration0,
        pin_level(symbol.level1),
        symbol.duration1,
    )
}

fn pin_level(level: Level) -> PinLevel {
    match level {
        Level::Low => PinLevel::Low,
        Level::High => PinLevel::High,
    }
}
