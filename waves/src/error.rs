//! Validation errors for field construction and ticking.

use thiserror::Error;

/// Rejected construction parameters or tick inputs.
///
/// Construction fails before any buffer is allocated, so no partially
/// initialized field is ever handed out.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WaveError {
    #[error("wave grid needs at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("wave amplitude must be non-negative, got {0}")]
    NegativeAmplitude(f32),

    #[error("time step must be non-negative, got {0}")]
    NegativeTimeStep(f32),

    #[error("destination holds {dest} values but the field has {vertices} vertices")]
    BufferSizeMismatch { dest: usize, vertices: usize },
}
