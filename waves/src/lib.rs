//! Procedural wave surface simulation.
//!
//! This crate owns the CPU side of an animated seascape: a grid of vertex
//! heights ([`WaveField`]) recomputed from elapsed time every frame, and a
//! single-body sine [`Oscillator`] for objects floating on the surface.
//! Rendering stays with the host engine; the simulation only hands out
//! height buffers for the host to upload into its own vertex data.

pub mod constants;
pub mod error;
pub mod field;
pub mod oscillator;
pub mod plugin;

pub use constants::*;
pub use error::WaveError;
pub use field::{FieldPreset, WaveField, WaveFieldConfig};
pub use oscillator::Oscillator;
pub use plugin::{Bob, WaveTickSet, WavesPlugin};
