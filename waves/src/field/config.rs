//! Wave field configuration and presets.
//!
//! Configs are plain serializable data so a surface can be saved, synced,
//! or rebuilt identically on another machine.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FREQUENCY_SCALE, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_WAVE_AMPLITUDE,
    DEFAULT_WAVE_SPEED,
};
use crate::error::WaveError;

/// Construction parameters for a [`WaveField`](super::WaveField).
///
/// All values are fixed once a field is built from them; retuning a live
/// surface means building a new field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaveFieldConfig {
    /// Vertex rows in the grid.
    pub rows: usize,
    /// Vertex columns in the grid.
    pub cols: usize,
    /// Maximum vertical displacement from the base height (world units).
    pub amplitude: f32,
    /// Time multiplier applied to the wave clock.
    pub speed: f32,
    /// Scale applied to the squared vertex index when computing phase.
    ///
    /// Phase grows superlinearly with the index on purpose: with a linear
    /// phase, adjacent vertices ripple in lockstep and the surface reads
    /// as a regular sweep instead of open water. This is an aesthetic
    /// knob, not a physical constant.
    pub frequency_scale: f32,
    /// Resting surface height (Y coordinate) before displacement.
    pub base_level: f32,
}

impl WaveFieldConfig {
    pub fn new(rows: usize, cols: usize, amplitude: f32, speed: f32, frequency_scale: f32) -> Self {
        Self {
            rows,
            cols,
            amplitude,
            speed,
            frequency_scale,
            base_level: 0.0,
        }
    }

    /// Place the resting surface at a different Y coordinate.
    pub fn with_base_level(mut self, base_level: f32) -> Self {
        self.base_level = base_level;
        self
    }

    /// Total number of vertices in the grid.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check construction preconditions.
    ///
    /// A field built from a config that passes here cannot fail later.
    pub fn validate(&self) -> Result<(), WaveError> {
        if self.rows < 1 || self.cols < 1 {
            return Err(WaveError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.amplitude < 0.0 {
            return Err(WaveError::NegativeAmplitude(self.amplitude));
        }
        Ok(())
    }
}

impl Default for WaveFieldConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_GRID_ROWS,
            DEFAULT_GRID_COLS,
            DEFAULT_WAVE_AMPLITUDE,
            DEFAULT_WAVE_SPEED,
            DEFAULT_FREQUENCY_SCALE,
        )
    }
}

/// Preset surface conditions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub enum FieldPreset {
    /// Completely flat surface (no displacement at all).
    Still,
    /// Gentle swell, lake-like.
    Calm,
    /// Standard open-sea surface.
    #[default]
    Ocean,
    /// Heavy seas.
    Storm,
}

impl FieldPreset {
    /// Build the config for this preset around the given resting height.
    pub fn to_config(self, base_level: f32) -> WaveFieldConfig {
        let config = match self {
            FieldPreset::Still => {
                WaveFieldConfig::new(DEFAULT_GRID_ROWS, DEFAULT_GRID_COLS, 0.0, 0.0, 0.0)
            }
            FieldPreset::Calm => {
                WaveFieldConfig::new(DEFAULT_GRID_ROWS, DEFAULT_GRID_COLS, 0.8, 1.5, 0.5)
            }
            FieldPreset::Ocean => WaveFieldConfig::default(),
            FieldPreset::Storm => {
                WaveFieldConfig::new(DEFAULT_GRID_ROWS, DEFAULT_GRID_COLS, 5.0, 4.5, 1.5)
            }
        };

        config.with_base_level(base_level)
    }
}
