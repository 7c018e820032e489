use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::peripherals::RMT;
use esp_hal::rmt::PulseCode;
use log::{error, info, warn};
use static_cell::make_static;

use myrtio_pixel_encoder::{
    FrameEncoder, LedError, PixelStrip, Rgb, TimingError, TimingTable,
};

use crate::infrastructure::config::{self, MAX_LED_COUNT};
use crate::infrastructure::drivers::{RmtChannelError, RmtSymbolChannel};

/// A whole strip frame plus the reset symbol fits the staging buffer
const STAGING_SYMBOLS: usize = FrameEncoder::frame_symbols(MAX_LED_COUNT * 3);

const FRAME_QUEUE_DEPTH: usize = config::RMT.queue_depth;

/// Colors for one refresh, handed over by value
pub(crate) type Frame = heapless::Vec<Rgb, MAX_LED_COUNT>;

pub(crate) type FrameSender =
    Sender<'static, CriticalSectionRawMutex, Frame, FRAME_QUEUE_DEPTH>;

pub(crate) type LedStrip = PixelStrip<RmtSymbolChannel<'static, STAGING_SYMBOLS>>;

static FRAME_CHANNEL: Channel<CriticalSectionRawMutex, Frame, FRAME_QUEUE_DEPTH> = Channel::new();

#[derive(Debug)]
pub(crate) enum LedInitError {
    Timing(TimingError),
    Channel(RmtChannelError),
}

/// Task owning the strip.
/// It receives frames from the frame channel and sends them one at a time.
#[embassy_executor::task]
pub(crate) async fn led_task(mut strip: LedStrip) {
    let receiver = FRAME_CHANNEL.receiver();
    info!("led: waiting for frames");

    loop {
        let frame = receiver.receive().await;
        // RMT refill must not be preempted mid-frame
        let result = critical_section::with(|_| strip.set_led_colors(&frame));

        match result {
            Ok(()) => {}
            Err(LedError::OutOfMemory) => {
                warn!("led: frame buffer allocation failed, refresh skipped");
            }
            Err(LedError::Channel(RmtChannelError::Unavailable)) => {
                error!("led: rmt channel lost, frame dropped");
            }
            Err(err) => error!("led: refresh failed: {:?}", err),
        }
    }
}

/// Build the timing table, the encoder and the RMT channel.
///
/// Any failure here is a configuration error.
pub(crate) fn init_led_strip<O>(
    rmt: RMT<'static>,
    pin: O,
) -> Result<(LedStrip, FrameSender), LedInitError>
where
    O: PeripheralOutput<'static>,
{
    let resolution_hz = config::RMT.resolution_hz();
    let table = TimingTable::from_chip(resolution_hz, &config::TIMING).map_err(LedInitError::Timing)?;
    info!(
        "led: {} Hz, bit0={:?} bit1={:?} reset={:?}",
        resolution_hz,
        table.bit0(),
        table.bit1(),
        table.reset()
    );

    let buffer = make_static!([PulseCode::default(); STAGING_SYMBOLS]);
    let channel = RmtSymbolChannel::new(rmt, pin, buffer).map_err(LedInitError::Channel)?;
    let strip = PixelStrip::new(channel, FrameEncoder::from_table(&table))
        .with_color_order(config::LIGHT.color_order)
        .with_max_leds(MAX_LED_COUNT);

    Ok((strip, FRAME_CHANNEL.sender()))
}
