//! Default tuning values for the simulation.

/// Maximum vertical displacement of the default sea surface (world units).
pub const DEFAULT_WAVE_AMPLITUDE: f32 = 2.5;
/// Time multiplier applied to the wave clock.
pub const DEFAULT_WAVE_SPEED: f32 = 3.0;
/// Scale applied to the squared vertex index when computing phase.
pub const DEFAULT_FREQUENCY_SCALE: f32 = 1.0;
/// Vertex rows of the default sea plane (a 150x150-segment grid).
pub const DEFAULT_GRID_ROWS: usize = 151;
/// Vertex columns of the default sea plane.
pub const DEFAULT_GRID_COLS: usize = 151;

/// Vertical travel of a floating body riding the default swell.
pub const DEFAULT_BOB_AMPLITUDE: f32 = 1.0;
/// Bob speed matching the default wave clock multiplier.
pub const DEFAULT_BOB_SPEED: f32 = 3.0;
