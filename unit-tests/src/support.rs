use myrtio_pixel_encoder::{
    EncodeState, FrameEncoder, PulseSymbol, PulseTiming, Rgb, SymbolChannel,
};

pub(crate) const RESET_TICKS: u16 = 500;

/// Encoder with the reference timings (10 MHz: 4/8, 8/4, 500)
pub(crate) fn reference_encoder() -> FrameEncoder {
    FrameEncoder::new(PulseTiming::new(4, 8), PulseTiming::new(8, 4), RESET_TICKS).unwrap()
}

/// Simulated RMT channel with a fixed-size symbol memory
pub(crate) struct SimChannel {
    memory: usize,
    pending: Vec<PulseSymbol>,
    pub(crate) wire: Vec<PulseSymbol>,
    pub(crate) flushes: usize,
}

impl SimChannel {
    pub(crate) fn new(memory: usize) -> Self {
        Self {
            memory,
            pending: Vec::new(),
            wire: Vec::new(),
            flushes: 0,
        }
    }
}

impl SymbolChannel for SimChannel {
    type Error = ();

    fn free_symbols(&self) -> usize {
        self.memory - self.pending.len()
    }

    fn queue(&mut self, symbols: &[PulseSymbol]) -> Result<(), ()> {
        assert!(symbols.len() <= self.free_symbols(), "channel overrun");
        self.pending.extend_from_slice(symbols);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ()> {
        self.wire.append(&mut self.pending);
        self.flushes += 1;
        Ok(())
    }
}

/// Encode `frame` feeding windows of the given sizes, cycling through them.
///
/// Returns the concatenated symbols and the state of every call.
pub(crate) fn encode_in_windows(
    encoder: &mut FrameEncoder,
    frame: &[u8],
    windows: &[usize],
) -> (Vec<PulseSymbol>, Vec<EncodeState>) {
    let mut symbols = Vec::new();
    let mut states = Vec::new();
    let mut scratch = vec![PulseSymbol::default(); windows.iter().copied().max().unwrap_or(1)];

    encoder.reset();
    for &size in windows.iter().cycle() {
        let (written, state) = encoder.encode_frame(frame, &mut scratch[..size]);
        symbols.extend_from_slice(&scratch[..written]);
        states.push(state);
        if state.is_complete() {
            break;
        }
    }
    (symbols, states)
}

/// Rebuild wire bytes from data symbols
pub(crate) fn decode_bytes(symbols: &[PulseSymbol]) -> Vec<u8> {
    symbols
        .chunks_exact(8)
        .map(|bits| {
            bits.iter()
                .fold(0u8, |acc, s| (acc << 1) | u8::from(s.duration0 > s.duration1))
        })
        .collect()
}

pub(crate) fn grb_frame(colors: &[Rgb]) -> Vec<u8> {
    colors.iter().flat_map(|c| [c.g, c.r, c.b]).collect()
}
