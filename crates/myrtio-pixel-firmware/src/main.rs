#![no_std]
#![no_main]
#![feature(type_alias_impl_trait)]

mod infrastructure;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use log::info;

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use crate::infrastructure::tasks::{init_led_strip, led_task, palette_task};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Frame buffers are allocated per refresh (32 KB)
    esp_alloc::heap_allocator!(size: 32 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Out-of-tolerance timings abort here instead of reaching the LEDs
    let (strip, sender) = match init_led_strip(peripherals.RMT, crate::led_gpio!(peripherals)) {
        Ok(led) => led,
        Err(err) => panic!("led: init failed: {:?}", err),
    };
    spawner.spawn(led_task(strip)).ok();
    spawner.spawn(palette_task(sender)).ok();
    info!("main: led and palette tasks started");

    loop {
        Timer::after(Duration::from_secs(5)).await;
    }
}
