use myrtio_pixel_encoder::{
    ChipTiming, EncodeState, EncoderPhase, FrameEncoder, LedError, PixelStrip, PulseSymbol, Rgb,
    TimingTable, transmit_frame,
};
use smart_leds::{SmartLedsWrite, brightness};

use crate::support::{
    RESET_TICKS, SimChannel, decode_bytes, encode_in_windows, grb_frame, reference_encoder,
};

#[test]
fn test_single_red_led_end_to_end() {
    let mut strip = PixelStrip::new(SimChannel::new(64), reference_encoder());

    strip.set_led_colors(&[Rgb::new(25, 0, 0)]).unwrap();

    let wire = &strip.channel().wire;
    assert_eq!(wire.len(), 25);
    assert_eq!(decode_bytes(&wire[..24]), [0, 25, 0]);
    assert_eq!(wire[24], PulseSymbol::reset(RESET_TICKS));
    assert_eq!(strip.encoder().phase(), EncoderPhase::Done);
}

#[test]
fn test_single_call_reports_complete() {
    let mut encoder = reference_encoder();
    let mut out = [PulseSymbol::default(); 64];

    let (written, state) = encoder.encode_frame(&[0, 25, 0], &mut out);

    assert_eq!(written, 25);
    assert_eq!(state, EncodeState::COMPLETE);
}

#[test]
fn test_channel_reordering() {
    let mut strip = PixelStrip::new(SimChannel::new(64), reference_encoder());

    strip.set_led_colors(&[Rgb::new(10, 20, 30)]).unwrap();

    assert_eq!(decode_bytes(&strip.channel().wire[..24]), [20, 10, 30]);
}

#[test]
fn test_zero_length_frame() {
    let mut encoder = reference_encoder();
    let mut out = [PulseSymbol::default(); 1];

    let (written, state) = encoder.encode_frame(&[], &mut out);

    assert_eq!(written, 1);
    assert!(state.is_complete());
    assert_eq!(out[0], PulseSymbol::reset(RESET_TICKS));
}

#[test]
fn test_long_strip_through_single_memory_block() {
    // 100 LEDs is 2401 symbols, far more than one 48-symbol block
    let colors: Vec<Rgb> = (0..100u8).map(|i| Rgb::new(i, 255 - i, i / 2)).collect();
    let mut strip = PixelStrip::new(SimChannel::new(48), reference_encoder());

    strip.set_led_colors(&colors).unwrap();

    let channel = strip.channel();
    assert_eq!(channel.wire.len(), 2401);
    assert_eq!(decode_bytes(&channel.wire[..2400]), grb_frame(&colors));
    assert_eq!(channel.wire.last(), Some(&PulseSymbol::reset(RESET_TICKS)));
    assert_eq!(channel.flushes, 2401usize.div_ceil(48));
}

#[test]
fn test_reset_symbol_lands_on_its_own_call() {
    let mut encoder = reference_encoder();

    // One byte fills exactly one 8-symbol window
    let (symbols, states) = encode_in_windows(&mut encoder, &[0x5A], &[8]);

    assert_eq!(states, [EncodeState::MEM_FULL, EncodeState::COMPLETE]);
    assert_eq!(symbols.len(), 9);
    assert_eq!(decode_bytes(&symbols[..8]), [0x5A]);
}

#[test]
fn test_app_level_brightness_stays_out_of_encoder() {
    let mut strip = PixelStrip::new(SimChannel::new(64), reference_encoder());
    let color = Rgb::new(255, 128, 0);

    // 10% brightness, chosen by the caller
    strip.write(brightness([color].into_iter(), 25)).unwrap();

    let bytes = decode_bytes(&strip.channel().wire[..24]);
    assert_eq!(bytes, grb_frame(&brightness([color].into_iter(), 25).collect::<Vec<_>>()));
    assert!(bytes[1] < 255);
}

#[test]
fn test_datasheet_table_drives_the_same_stream() {
    let table = TimingTable::from_chip(10_000_000, &ChipTiming::WS2812B).unwrap();
    let mut encoder = FrameEncoder::from_table(&table);
    let mut channel = SimChannel::new(16);

    let total = transmit_frame(&mut encoder, &[0xC3, 0x3C], &mut channel).unwrap();

    assert_eq!(total, 17);
    assert_eq!(decode_bytes(&channel.wire[..16]), [0xC3, 0x3C]);
    assert_eq!(channel.wire[16], table.reset());
}

#[test]
fn test_too_many_leds_keeps_previous_frame() {
    let mut strip = PixelStrip::new(SimChannel::new(64), reference_encoder()).with_max_leds(1);
    strip.set_led_colors(&[Rgb::new(1, 2, 3)]).unwrap();

    let result = strip.set_led_colors(&[Rgb::new(9, 9, 9), Rgb::new(9, 9, 9)]);

    assert_eq!(result, Err(LedError::TooManyLeds));
    assert_eq!(strip.channel().wire.len(), 25);
    assert_eq!(decode_bytes(&strip.channel().wire[..24]), [2, 1, 3]);
}
