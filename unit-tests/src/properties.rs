use myrtio_pixel_encoder::{ByteTranslator, ColorOrder, PixelStrip, PulseSymbol, Rgb, TimingTable};
use proptest::collection::vec;
use proptest::prelude::*;

use crate::support::{
    RESET_TICKS, SimChannel, decode_bytes, encode_in_windows, grb_frame, reference_encoder,
};

fn rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

proptest! {
    #[test]
    fn byte_symbols_reconstruct_msb_first(byte in any::<u8>()) {
        let encoder = reference_encoder();
        let translator: &ByteTranslator = encoder.translator();

        let symbols = translator.encode(byte);

        prop_assert_eq!(symbols.len(), 8);
        prop_assert_eq!(decode_bytes(&symbols), vec![byte]);
        for (i, symbol) in symbols.iter().enumerate() {
            let bit = byte & (0x80 >> i) != 0;
            prop_assert_eq!(*symbol, translator.symbol(bit));
        }
    }

    #[test]
    fn frame_symbol_count_and_trailing_reset(
        colors in vec(rgb(), 0..40),
        memory in 1usize..100,
    ) {
        let mut strip = PixelStrip::new(SimChannel::new(memory), reference_encoder());

        strip.set_led_colors(&colors).unwrap();

        let wire = &strip.channel().wire;
        prop_assert_eq!(wire.len(), 8 * 3 * colors.len() + 1);
        prop_assert_eq!(wire.last(), Some(&PulseSymbol::reset(RESET_TICKS)));
        prop_assert!(wire[..wire.len() - 1].iter().all(|s| !s.is_end_marker()));
        prop_assert_eq!(decode_bytes(&wire[..wire.len() - 1]), grb_frame(&colors));
    }

    #[test]
    fn resumption_matches_uninterrupted_encoding(
        frame in vec(any::<u8>(), 0..64),
        windows in vec(1usize..20, 1..8),
    ) {
        let mut encoder = reference_encoder();
        let whole = frame.len() * 8 + 1;
        let (expected, states) = encode_in_windows(&mut encoder, &frame, &[whole]);
        prop_assert_eq!(states.len(), 1);

        let (split, states) = encode_in_windows(&mut encoder, &frame, &windows);

        prop_assert_eq!(split, expected);
        let (last, paused) = states.split_last().unwrap();
        prop_assert!(last.is_complete());
        prop_assert!(paused.iter().all(|s| s.is_mem_full() && !s.is_complete()));
    }

    #[test]
    fn wire_order_is_applied_before_encoding(color in rgb()) {
        let mut strip = PixelStrip::new(SimChannel::new(64), reference_encoder())
            .with_color_order(ColorOrder::Grb);

        strip.set_led_colors(&[color]).unwrap();

        prop_assert_eq!(decode_bytes(&strip.channel().wire[..24]), vec![color.g, color.r, color.b]);
    }

    #[test]
    fn tick_tables_keep_both_bit_symbols_distinct(
        high0 in 1u16..100, low0 in 1u16..100,
        high1 in 1u16..100, low1 in 1u16..100,
    ) {
        use myrtio_pixel_encoder::PulseTiming;

        let bit0 = PulseTiming::new(high0, low0);
        let bit1 = PulseTiming::new(high1, low1);
        let table = TimingTable::new(bit0, bit1, 500);

        prop_assert_eq!(table.is_ok(), bit0 != bit1);
    }
}
