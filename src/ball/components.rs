//! Ball-related components

use bevy::prelude::*;

use crate::physics::Velocity;

/// A launchable bowling ball.
///
/// Spawning a `Ball` also gives the entity the capabilities its launch needs:
/// a `Velocity` (rigid body) and a `LaunchSound` (audio source). The launch
/// happens once, on the first update after the ball is added.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
#[require(Velocity, LaunchSound, Transform)]
pub struct Ball {
    /// Speed along +Z imparted at launch. Zero and negative values are valid.
    pub launch_speed: f32,
}

impl Ball {
    pub fn new(launch_speed: f32) -> Self {
        Self { launch_speed }
    }

    /// Velocity written at launch
    pub fn launch_velocity(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.launch_speed)
    }
}

/// Clip played when the ball is launched
#[derive(Component, Default, Debug, Clone)]
pub struct LaunchSound(pub Handle<AudioSource>);

/// Marker for the one-shot audio entity spawned under a ball at launch
#[derive(Component)]
pub struct LaunchSoundPlayback;

/// Shared asset handles for newly spawned balls
#[derive(Resource, Default, Clone)]
pub struct BallAssets {
    pub launch_sound: Handle<AudioSource>,
}
