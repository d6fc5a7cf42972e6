//! Tunable constants for bowlmaster
//!
//! Default gameplay values live here; runtime values come from `tuning`.

use bevy::prelude::*;

// =============================================================================
// LAUNCH
// =============================================================================

pub const DEFAULT_LAUNCH_SPEED: f32 = 500.0; // Units per second along +Z
pub const BALL_RADIUS: f32 = 10.0;
pub const LAUNCH_SOUND_PATH: &str = "sounds/ball_launch.ogg";

// =============================================================================
// LANE GEOMETRY
// =============================================================================

pub const LANE_WIDTH: f32 = 105.0;
pub const LANE_LENGTH: f32 = 1829.0;

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(0.1, 0.1, 0.12);
pub const LANE_COLOR: Color = Color::srgb(0.78, 0.62, 0.42); // Maple
pub const BALL_COLOR: Color = Color::srgb(0.15, 0.2, 0.55);

// =============================================================================
// TIMING
// =============================================================================

/// Physics step used when a frame reports a zero delta
pub const MIN_PHYSICS_DT: f32 = 1.0 / 60.0;
