//! Grid-based wave surface simulation.
//!
//! This module provides the height-field half of the seascape:
//! - [`WaveFieldConfig`] / [`FieldPreset`]: serializable tuning parameters
//! - [`WaveField`]: the live surface, one height sample per vertex
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              WaveFieldConfig                  │
//! │  rows, cols, amplitude, speed, freq scale     │
//! └──────────────────────┬────────────────────────┘
//!                        ▼
//! ┌───────────────────────────────────────────────┐
//! │                 WaveField                     │
//! │  base heights (fixed noise)  + frame clock    │
//! │  advance(dt) → recompute every vertex height  │
//! └──────────────────────┬────────────────────────┘
//!                        ▼
//!          host renderer copies heights()
//!          into its own vertex buffer
//! ```
//!
//! The field never touches GPU state: it hands out a read-only height
//! slice (or copies into a caller buffer) and the host owns whatever
//! dirty-flag or upload step its renderer needs.

pub mod config;
pub mod wave_field;

pub use config::{FieldPreset, WaveFieldConfig};
pub use wave_field::WaveField;
