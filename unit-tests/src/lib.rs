//! Host-side behavior tests for the pixel encoder.
//!
//! The modules here exercise the encoder together with a simulated channel,
//! the way the firmware drives it.

#[cfg(test)]
mod frame_stream;
#[cfg(test)]
mod properties;
#[cfg(test)]
mod support;
