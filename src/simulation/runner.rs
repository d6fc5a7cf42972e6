//! Headless simulation runner

use bevy::prelude::*;
use serde::Serialize;
use std::fs;

use crate::ball::{Ball, LaunchSound, LaunchSoundPlayback};
use crate::constants::LANE_WIDTH;
use crate::events::{EventBus, EventLogConfig, EventLogger, LaunchConfig};
use crate::physics::Velocity;
use crate::tuning::LaunchTweaks;

use super::app_builder::HeadlessAppBuilder;
use super::config::SimConfig;

/// Final state of one ball
#[derive(Debug, Clone, Serialize)]
pub struct BallResult {
    pub ball: u64,
    pub launch_speed: f32,
    pub final_position: [f32; 3],
    pub final_velocity: [f32; 3],
}

/// Outcome of a simulation run
#[derive(Debug, Clone, Serialize)]
pub struct SimResult {
    pub frames: u32,
    pub duration: f32,
    pub launches: usize,
    pub sounds_played: usize,
    pub balls: Vec<BallResult>,
}

/// X positions for `count` balls spread evenly across the lane
fn lane_positions(count: u32, ball_radius: f32) -> Vec<Vec3> {
    let count = count.max(1);
    let spacing = LANE_WIDTH / count as f32;
    (0..count)
        .map(|i| {
            let x = -LANE_WIDTH / 2.0 + spacing * (i as f32 + 0.5);
            Vec3::new(x, ball_radius, 0.0)
        })
        .collect()
}

/// Build the headless app for `config`, spawn its balls, and run every frame
pub fn run_frames(config: &SimConfig, builder: HeadlessAppBuilder) -> SimResult {
    let mut app = builder.with_fps(config.fps).build();

    if let Some(speed) = config.launch_speed {
        app.world_mut().resource_mut::<LaunchTweaks>().launch_speed = speed;
    }
    let tweaks = app.world().resource::<LaunchTweaks>().clone();

    {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        let mut logger = app.world_mut().resource_mut::<EventLogger>();
        logger.start_session(&timestamp);
        logger.log_config(LaunchConfig::from(&tweaks));
    }

    for pos in lane_positions(config.balls, tweaks.ball_radius) {
        app.world_mut().spawn((
            Ball::new(tweaks.launch_speed),
            LaunchSound::default(),
            Transform::from_translation(pos),
        ));
    }

    for frame in 0..config.frames {
        app.update();
        if !config.quiet && frame > 0 && frame % 60 == 0 {
            info!("frame {}/{}", frame, config.frames);
        }
    }

    let duration = app.world().resource::<Time>().elapsed_secs();
    app.world_mut().resource_mut::<EventLogger>().end_session(duration);

    let balls: Vec<BallResult> = app
        .world_mut()
        .query::<(Entity, &Ball, &Transform, &Velocity)>()
        .iter(app.world())
        .map(|(entity, ball, transform, velocity)| BallResult {
            ball: entity.to_bits(),
            launch_speed: ball.launch_speed,
            final_position: transform.translation.to_array(),
            final_velocity: velocity.0.to_array(),
        })
        .collect();
    let sounds_played = app
        .world_mut()
        .query::<&LaunchSoundPlayback>()
        .iter(app.world())
        .count();
    let launches = app.world().resource::<EventBus>().emitted_count("BL");

    SimResult {
        frames: config.frames,
        duration,
        launches,
        sounds_played,
        balls,
    }
}

/// Run a simulation and report the result to stdout or the output file
pub fn run_simulation(config: &SimConfig) -> SimResult {
    let mut builder = HeadlessAppBuilder::new().with_tuning_file();
    if !config.quiet {
        builder = builder.with_logging();
    }
    if config.log_events {
        builder = builder.with_event_log(EventLogConfig::default());
    }

    let result = run_frames(config, builder);

    match serde_json::to_string_pretty(&result) {
        Ok(json) => match &config.output_file {
            Some(path) => {
                if let Err(e) = fs::write(path, &json) {
                    eprintln!("Failed to write {}: {}", path, e);
                    println!("{}", json);
                } else if !config.quiet {
                    println!("Wrote result to {}", path);
                }
            }
            None => println!("{}", json),
        },
        Err(e) => eprintln!("Failed to serialize result: {}", e),
    }

    result
}
