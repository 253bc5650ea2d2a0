//! Bevy plugin that steps the wave simulation each frame.

use bevy::prelude::*;
use bevy_log::warn;

use crate::field::WaveField;
use crate::oscillator::Oscillator;

/// Plugin that advances the surface and floating bodies once per frame.
///
/// The host inserts a [`WaveField`] resource (built from its own config);
/// the plugin only ticks whatever is present. `ResMut` exclusivity keeps
/// at most one tick in flight.
pub struct WavesPlugin;

impl Plugin for WavesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (advance_wave_field, bob_bodies).in_set(WaveTickSet));
    }
}

/// Label for the per-frame simulation systems, so hosts can order their
/// own readers after the tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct WaveTickSet;

/// Component for entities that ride the swell (ships, buoys).
#[derive(Component, Debug, Clone, Copy)]
pub struct Bob {
    pub oscillator: Oscillator,
    /// Resting Y position the offset is applied around.
    pub base_height: f32,
}

/// System that advances the wave field by the frame's wall-clock delta.
fn advance_wave_field(field: Option<ResMut<WaveField>>, time: Res<Time>) {
    let Some(mut field) = field else {
        return;
    };

    // Time::delta_secs is never negative, so this only fires if the
    // field's contract changes underneath us.
    if let Err(err) = field.advance(time.delta_secs()) {
        warn!("wave field tick skipped: {err}");
    }
}

/// System that bobs floating bodies on the shared frame clock.
fn bob_bodies(time: Res<Time>, mut bodies: Query<(&Bob, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (bob, mut transform) in &mut bodies {
        transform.translation.y = bob.base_height + bob.oscillator.value_at(elapsed);
    }
}
