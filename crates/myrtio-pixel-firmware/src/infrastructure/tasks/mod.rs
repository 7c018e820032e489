pub(crate) mod led;
pub(crate) mod palette;

pub(crate) use led::{init_led_strip, led_task};
pub(crate) use palette::palette_task;
