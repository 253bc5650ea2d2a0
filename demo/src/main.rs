//! Headless seascape driver.
//!
//! Builds a wave field from CLI arguments, steps it under a schedule
//! runner at a fixed frame rate, and logs surface statistics. No window,
//! no renderer; this exercises exactly what a rendering host would call.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::{debug, info, LogPlugin};
use bevy::prelude::*;
use clap::{Parser, ValueEnum};
use waves::{Bob, FieldPreset, Oscillator, WaveField, WaveTickSet, WavesPlugin};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Surface preset; the flags below override individual values.
    #[arg(short, long, value_enum, default_value_t = PresetArg::Ocean)]
    preset: PresetArg,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    #[arg(long)]
    amplitude: Option<f32>,

    #[arg(long)]
    speed: Option<f32>,

    #[arg(long)]
    frequency_scale: Option<f32>,

    /// Resting surface height.
    #[arg(long, default_value_t = 0.0)]
    base_level: f32,

    /// Number of frames to simulate before exiting.
    #[arg(short, long, default_value_t = 300)]
    frames: u32,

    /// Frame rate of the schedule runner.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Log surface statistics every this many frames.
    #[arg(long, default_value_t = 30)]
    report_every: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum PresetArg {
    Still,
    Calm,
    Ocean,
    Storm,
}

impl From<PresetArg> for FieldPreset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Still => FieldPreset::Still,
            PresetArg::Calm => FieldPreset::Calm,
            PresetArg::Ocean => FieldPreset::Ocean,
            PresetArg::Storm => FieldPreset::Storm,
        }
    }
}

#[derive(Resource)]
struct RunSettings {
    frames: u32,
    report_every: u32,
}

fn main() {
    let args = Args::parse();

    if args.frames == 0 || args.fps == 0 {
        eprintln!("Error: frames and fps must both be at least 1.");
        std::process::exit(1);
    }

    let mut config = FieldPreset::from(args.preset).to_config(args.base_level);
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(amplitude) = args.amplitude {
        config.amplitude = amplitude;
    }
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    if let Some(frequency_scale) = args.frequency_scale {
        config.frequency_scale = frequency_scale;
    }

    let field = match WaveField::new(config) {
        Ok(field) => field,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / f64::from(args.fps)),
        )))
        .add_plugins(LogPlugin::default())
        .add_plugins(WavesPlugin)
        .insert_resource(field)
        .insert_resource(RunSettings {
            frames: args.frames,
            report_every: args.report_every.max(1),
        })
        .add_systems(Startup, spawn_ship)
        .add_systems(Update, report_surface.after(WaveTickSet))
        .run();
}

fn spawn_ship(mut commands: Commands) {
    commands.spawn((
        Bob {
            oscillator: Oscillator::default(),
            base_height: 0.0,
        },
        Transform::default(),
    ));
}

fn report_surface(
    field: Res<WaveField>,
    settings: Res<RunSettings>,
    ships: Query<&Transform, With<Bob>>,
    mut frame: Local<u32>,
    mut app_exit: EventWriter<AppExit>,
) {
    *frame += 1;

    if *frame % settings.report_every == 0 || *frame >= settings.frames {
        let heights = field.heights();
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        for &height in heights {
            min = min.min(height);
            max = max.max(height);
            sum += f64::from(height);
        }
        let mean = sum / heights.len() as f64;

        info!(
            "frame {:>5} t={:7.3}s surface min {:+.3} max {:+.3} mean {:+.3}",
            *frame,
            field.elapsed_seconds(),
            min,
            max,
            mean
        );
        for ship in &ships {
            debug!("ship y {:+.3}", ship.translation.y);
        }
    }

    if *frame >= settings.frames {
        app_exit.write(AppExit::Success);
    }
}
