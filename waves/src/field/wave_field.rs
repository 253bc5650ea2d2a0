//! The live wave surface: per-vertex heights driven by a frame clock.

use bevy::ecs::resource::Resource;
use rand::Rng;

use super::config::WaveFieldConfig;
use crate::error::WaveError;

/// A rows x cols grid of vertex heights animated from elapsed time.
///
/// Construction fixes a per-vertex base height (the resting level plus a
/// small uniform perturbation so the surface never starts as a perfect
/// plane). Each [`advance`](WaveField::advance) call moves the clock and
/// recomputes every vertex from scratch:
///
/// ```text
/// height[i] = base[i] + sin(elapsed * speed + i² * frequency_scale) * amplitude
/// ```
///
/// Heights are a pure function of `(base[i], i, elapsed)` — nothing is
/// integrated across ticks, so ticking with a zero delta is an exact
/// no-op and two fields fed the same deltas stay identical forever.
///
/// Vertices are stored row-major; the linear index is what the phase term
/// keys off, so insertion order is part of the surface's shape and is
/// preserved for the lifetime of the field.
#[derive(Resource, Debug, Clone)]
pub struct WaveField {
    config: WaveFieldConfig,
    base_heights: Vec<f32>,
    heights: Vec<f32>,
    elapsed_seconds: f32,
}

impl WaveField {
    /// Build a field with thread-local noise.
    pub fn new(config: WaveFieldConfig) -> Result<Self, WaveError> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Build a field with caller-supplied noise, for reproducible runs.
    pub fn with_rng<R: Rng + ?Sized>(
        config: WaveFieldConfig,
        rng: &mut R,
    ) -> Result<Self, WaveError> {
        config.validate()?;

        let half = config.amplitude / 2.0;
        let mut base_heights = Vec::with_capacity(config.vertex_count());
        for _ in 0..config.vertex_count() {
            let noise = if half > 0.0 {
                rng.gen_range(-half..half)
            } else {
                0.0
            };
            base_heights.push(config.base_level + noise);
        }

        let heights = base_heights.clone();
        Ok(Self {
            config,
            base_heights,
            heights,
            elapsed_seconds: 0.0,
        })
    }

    /// Advance the clock by `delta_seconds` and recompute every vertex.
    ///
    /// Called once per frame by the host loop with the wall-clock delta
    /// since the previous frame. A zero delta recomputes in place and
    /// yields the same heights, so replays are idempotent.
    pub fn advance(&mut self, delta_seconds: f32) -> Result<(), WaveError> {
        if delta_seconds < 0.0 {
            return Err(WaveError::NegativeTimeStep(delta_seconds));
        }

        self.elapsed_seconds += delta_seconds;
        let time_phase = self.elapsed_seconds * self.config.speed;

        for (i, height) in self.heights.iter_mut().enumerate() {
            let index_phase = (i * i) as f32 * self.config.frequency_scale;
            *height = self.base_heights[i] + (time_phase + index_phase).sin() * self.config.amplitude;
        }

        Ok(())
    }

    /// Read-only view of the current heights, row-major.
    ///
    /// The slice is overwritten in place by the next `advance` call;
    /// renderers should copy it out rather than hold onto it.
    #[inline]
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// The fixed per-vertex reference heights set at construction.
    #[inline]
    pub fn base_heights(&self) -> &[f32] {
        &self.base_heights
    }

    /// Copy the current heights into a caller-owned vertex buffer.
    ///
    /// Any renderer-specific dirty-flag or upload step stays with the
    /// caller.
    pub fn copy_heights_into(&self, dest: &mut [f32]) -> Result<(), WaveError> {
        if dest.len() != self.heights.len() {
            return Err(WaveError::BufferSizeMismatch {
                dest: dest.len(),
                vertices: self.heights.len(),
            });
        }
        dest.copy_from_slice(&self.heights);
        Ok(())
    }

    /// Current height at a grid position, or `None` out of bounds.
    pub fn height_at(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.config.rows && col < self.config.cols {
            Some(self.heights[row * self.config.cols + col])
        } else {
            None
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.config.cols
    }

    /// Total number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.heights.len()
    }

    /// Seconds accumulated since construction. Never decreases.
    #[inline]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_seconds
    }

    /// The configuration this field was built from.
    pub fn config(&self) -> &WaveFieldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_field(config: WaveFieldConfig, seed: u64) -> WaveField {
        let mut rng = StdRng::seed_from_u64(seed);
        WaveField::with_rng(config, &mut rng).unwrap()
    }

    #[test]
    fn test_vertex_count_invariant() {
        let config = WaveFieldConfig::new(7, 11, 1.0, 2.0, 0.5);
        let mut field = seeded_field(config, 1);

        assert_eq!(field.vertex_count(), 77);
        assert_eq!(field.heights().len(), 77);
        assert_eq!(field.base_heights().len(), 77);

        field.advance(0.16).unwrap();
        assert_eq!(field.heights().len(), 77);
    }

    #[test]
    fn test_starts_at_base_heights() {
        let field = seeded_field(WaveFieldConfig::new(4, 4, 2.0, 3.0, 1.0), 2);
        assert_eq!(field.elapsed_seconds(), 0.0);
        assert_eq!(field.heights(), field.base_heights());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = WaveFieldConfig::new(0, 4, 1.0, 1.0, 1.0);
        assert!(WaveField::new(config).is_err());

        let config = WaveFieldConfig::new(4, 4, -1.0, 1.0, 1.0);
        assert_eq!(
            WaveField::new(config).err(),
            Some(WaveError::NegativeAmplitude(-1.0))
        );
    }

    #[test]
    fn test_zero_delta_is_idempotent() {
        let mut field = seeded_field(WaveFieldConfig::new(5, 5, 1.5, 3.0, 1.0), 3);
        field.advance(0.42).unwrap();
        let first = field.heights().to_vec();

        field.advance(0.0).unwrap();
        assert_eq!(field.heights(), first.as_slice());

        field.advance(0.0).unwrap();
        assert_eq!(field.heights(), first.as_slice());
    }

    #[test]
    fn test_same_seed_same_deltas_identical() {
        let config = WaveFieldConfig::new(6, 9, 2.5, 3.0, 1.0);
        let mut a = seeded_field(config, 7);
        let mut b = seeded_field(config, 7);

        assert_eq!(a.heights(), b.heights());
        for delta in [0.016, 0.0, 0.033, 1.25] {
            a.advance(delta).unwrap();
            b.advance(delta).unwrap();
            assert_eq!(a.heights(), b.heights());
        }
    }

    #[test]
    fn test_zero_amplitude_stays_flat() {
        let config = WaveFieldConfig::new(2, 2, 0.0, 1.0, 1.0);
        let mut field = WaveField::new(config).unwrap();

        assert_eq!(field.heights(), &[0.0, 0.0, 0.0, 0.0]);
        field.advance(1.0).unwrap();
        assert_eq!(field.heights(), &[0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_clock_accumulates() {
        let mut field = seeded_field(WaveFieldConfig::new(2, 3, 1.0, 1.0, 1.0), 4);
        field.advance(0.25).unwrap();
        field.advance(0.5).unwrap();
        assert!((field.elapsed_seconds() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_negative_delta_rejected() {
        let mut field = seeded_field(WaveFieldConfig::new(2, 2, 1.0, 1.0, 1.0), 5);
        field.advance(0.1).unwrap();
        let before = field.heights().to_vec();

        assert_eq!(
            field.advance(-0.1),
            Err(WaveError::NegativeTimeStep(-0.1))
        );
        // A rejected tick must not move the clock or the surface.
        assert!((field.elapsed_seconds() - 0.1).abs() < 1e-6);
        assert_eq!(field.heights(), before.as_slice());
    }

    #[test]
    fn test_displacement_stays_within_amplitude() {
        let config = WaveFieldConfig::new(8, 8, 2.0, 3.0, 1.0);
        let mut field = seeded_field(config, 6);

        for _ in 0..50 {
            field.advance(0.05).unwrap();
            for (height, base) in field.heights().iter().zip(field.base_heights()) {
                assert!((height - base).abs() <= config.amplitude + 1e-5);
            }
        }
    }

    #[test]
    fn test_base_noise_within_half_amplitude() {
        let config = WaveFieldConfig::new(20, 20, 2.5, 3.0, 1.0).with_base_level(10.0);
        let field = seeded_field(config, 8);

        for &base in field.base_heights() {
            assert!((base - 10.0).abs() <= 1.25);
        }
    }

    #[test]
    fn test_copy_heights_into() {
        let mut field = seeded_field(WaveFieldConfig::new(3, 3, 1.0, 2.0, 1.0), 9);
        field.advance(0.5).unwrap();

        let mut buffer = vec![0.0; 9];
        field.copy_heights_into(&mut buffer).unwrap();
        assert_eq!(buffer.as_slice(), field.heights());

        let mut wrong = vec![0.0; 8];
        assert_eq!(
            field.copy_heights_into(&mut wrong),
            Err(WaveError::BufferSizeMismatch { dest: 8, vertices: 9 })
        );
    }

    #[test]
    fn test_height_at_bounds() {
        let field = seeded_field(WaveFieldConfig::new(3, 4, 1.0, 1.0, 1.0), 10);

        assert!(field.height_at(2, 3).is_some());
        assert_eq!(field.height_at(2, 3), Some(field.heights()[2 * 4 + 3]));
        assert!(field.height_at(3, 0).is_none());
        assert!(field.height_at(0, 4).is_none());
    }
}
