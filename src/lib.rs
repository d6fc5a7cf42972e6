//! Bowlmaster - a bowling ball launcher built with Bevy
//!
//! This crate provides the ball components, launch systems, tuning and
//! event logging used by the game binary and the headless simulator.

// Core modules
pub mod config_watcher;
pub mod constants;
pub mod events;
pub mod simulation;
pub mod tuning;

// Game logic modules
pub mod ball;
pub mod physics;

// Re-export commonly used types for convenience
pub use ball::{
    Ball, BallAssets, LaunchSound, LaunchSoundPlayback, ball_update, launch, launch_new_balls,
    respawn_ball_on_key, spawn_ball,
};
pub use config_watcher::ConfigWatcher;
pub use constants::*;
pub use events::{
    BusEvent, EventBus, EventLogConfig, EventLogger, GameEvent, LaunchConfig,
    update_event_bus_time,
};
pub use physics::{Velocity, apply_velocity};
pub use simulation::{HeadlessAppBuilder, SimConfig, SimResult};
pub use tuning::{BallTuning, LaunchTweaks};
