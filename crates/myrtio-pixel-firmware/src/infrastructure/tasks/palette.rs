use core::iter;

use embassy_time::{Duration, Ticker};
use log::{debug, info, warn};
use smart_leds::brightness;

use crate::infrastructure::config::{self, PALETTE, PaletteEntry};
use crate::infrastructure::tasks::led::{Frame, FrameSender};

/// Task cycling the strip through the palette, one color per period
#[embassy_executor::task]
pub(crate) async fn palette_task(sender: FrameSender) {
    let mut ticker = Ticker::every(Duration::from_millis(config::CYCLE.period_ms));
    info!(
        "palette: cycling {} colors every {} ms",
        PALETTE.len(),
        config::CYCLE.period_ms
    );

    loop {
        for entry in &PALETTE {
            debug!("palette: {}", entry.name);
            sender.send(render(entry)).await;
            ticker.next().await;
        }
    }
}

/// Fill the strip with one color, scaled by the entry brightness
fn render(entry: &PaletteEntry) -> Frame {
    let mut frame = Frame::new();
    let colors = iter::repeat_n(entry.color, config::LIGHT.led_count);

    for color in brightness(colors, entry.brightness) {
        if frame.push(color).is_err() {
            warn!("palette: strip longer than {} leds, truncated", frame.len());
            break;
        }
    }
    frame
}
