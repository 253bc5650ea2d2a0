//! Analytic sine oscillator for single floating bodies.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BOB_AMPLITUDE, DEFAULT_BOB_SPEED};

/// Produces `amplitude * sin(speed * t + phase)`.
///
/// Side-effect free and stateless: it keeps no clock of its own, so a
/// caller can evaluate the same oscillator at any time, in any order,
/// and always get the same answer. Used to bob a floating object in sync
/// with (but independent of) the wave field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Oscillator {
    /// Maximum magnitude of the offset.
    pub amplitude: f32,
    /// Time multiplier.
    pub speed: f32,
    /// Phase offset in radians, for desynchronizing multiple bodies.
    pub phase: f32,
}

impl Oscillator {
    pub fn new(amplitude: f32, speed: f32) -> Self {
        Self {
            amplitude,
            speed,
            phase: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    /// Offset at the given elapsed time in seconds.
    #[inline]
    pub fn value_at(&self, elapsed_seconds: f32) -> f32 {
        self.amplitude * (self.speed * elapsed_seconds + self.phase).sin()
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(DEFAULT_BOB_AMPLITUDE, DEFAULT_BOB_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_zero_crossing_at_start() {
        let osc = Oscillator::new(2.0, 1.0);
        assert_eq!(osc.value_at(0.0), 0.0);
    }

    #[test]
    fn test_peak_at_quarter_period() {
        let osc = Oscillator::new(2.0, 1.0);
        assert!((osc.value_at(FRAC_PI_2) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_phase_shifts_the_curve() {
        let osc = Oscillator::new(1.0, 1.0).with_phase(FRAC_PI_2);
        assert!((osc.value_at(0.0) - 1.0).abs() < 1e-6);
        assert!(osc.value_at(FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_speed_compresses_the_period() {
        let osc = Oscillator::new(1.0, 2.0);
        // Full period at speed 2 is pi seconds.
        assert!(osc.value_at(PI).abs() < 1e-5);
    }

    #[test]
    fn test_pure_function_of_time() {
        let osc = Oscillator::new(1.5, 3.0);
        let first = osc.value_at(0.7);
        let _ = osc.value_at(123.4);
        assert_eq!(osc.value_at(0.7), first);
    }
}
