//! Event type definitions for the logging system

use serde::{Deserialize, Serialize};

use crate::tuning::LaunchTweaks;

/// Launch configuration snapshot for analytics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    pub launch_speed: f32,
    pub ball_radius: f32,
}

impl From<&LaunchTweaks> for LaunchConfig {
    fn from(tweaks: &LaunchTweaks) -> Self {
        Self {
            launch_speed: tweaks.launch_speed,
            ball_radius: tweaks.ball_radius,
        }
    }
}

/// All game events that can be logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    // === Session Events ===
    /// Session started (generated once per game launch)
    SessionStart {
        session_id: String, // UUID v4
        timestamp: String,
    },
    /// Launch configuration in effect for this session
    Config(LaunchConfig),
    /// Session ended after `duration` seconds
    SessionEnd { duration: f32 },

    // === Ball Events ===
    // `ball` is `Entity::to_bits()`, so a reused entity slot gets a new id

    /// Ball entity entered the world
    BallSpawned {
        ball: u64,
        pos: (f32, f32, f32),
        launch_speed: f32,
    },
    /// Ball velocity was overwritten by its launch
    BallLaunched {
        ball: u64,
        velocity: (f32, f32, f32),
    },
    /// Launch sound playback requested
    LaunchSoundPlayed { ball: u64 },

    // === Sampled State ===
    Tick {
        frame: u32,
        ball: u64,
        pos: (f32, f32, f32),
        vel: (f32, f32, f32),
    },
}

impl GameEvent {
    /// 2-char code used in the compact log format
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SE",
            GameEvent::Config(_) => "CF",
            GameEvent::SessionEnd { .. } => "SX",
            GameEvent::BallSpawned { .. } => "BS",
            GameEvent::BallLaunched { .. } => "BL",
            GameEvent::LaunchSoundPlayed { .. } => "AS",
            GameEvent::Tick { .. } => "T",
        }
    }
}
