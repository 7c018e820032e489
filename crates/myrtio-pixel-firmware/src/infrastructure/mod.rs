//! Infrastructure layer - hardware bindings
//!
//! Compile-time configuration, the RMT channel driver and the scheduled tasks
//! that feed the pixel encoder.

pub(crate) mod config;
pub(crate) mod drivers;
pub(crate) mod tasks;
