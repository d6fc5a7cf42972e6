//! Ball launch systems

use bevy::prelude::*;

use crate::ball::components::*;
use crate::events::{EventBus, GameEvent};
use crate::physics::Velocity;
use crate::tuning::LaunchTweaks;

/// Spawn a ball that will launch itself on the next update
pub fn spawn_ball(
    commands: &mut Commands,
    launch_speed: f32,
    sound: Handle<AudioSource>,
    position: Vec3,
) -> Entity {
    commands
        .spawn((
            Ball::new(launch_speed),
            LaunchSound(sound),
            Transform::from_translation(position),
        ))
        .id()
}

/// Launch a ball: overwrite its velocity and request one playback of its sound.
///
/// The previous velocity is discarded, not added to. The sound plays on a child
/// entity that despawns when playback finishes (or with the ball).
pub fn launch(
    commands: &mut Commands,
    entity: Entity,
    ball: &Ball,
    velocity: &mut Velocity,
    sound: &LaunchSound,
) {
    velocity.0 = ball.launch_velocity();
    commands.entity(entity).with_child((
        AudioPlayer::new(sound.0.clone()),
        PlaybackSettings::DESPAWN,
        LaunchSoundPlayback,
    ));
}

/// Launch every ball added since this system last ran
pub fn launch_new_balls(
    mut commands: Commands,
    mut bus: ResMut<EventBus>,
    mut balls: Query<(Entity, &Ball, &mut Velocity, &LaunchSound, &Transform), Added<Ball>>,
) {
    for (entity, ball, mut velocity, sound, transform) in &mut balls {
        let pos = transform.translation;
        bus.emit(GameEvent::BallSpawned {
            ball: entity.to_bits(),
            pos: (pos.x, pos.y, pos.z),
            launch_speed: ball.launch_speed,
        });

        launch(&mut commands, entity, ball, &mut velocity, sound);

        let v = velocity.0;
        bus.emit(GameEvent::BallLaunched {
            ball: entity.to_bits(),
            velocity: (v.x, v.y, v.z),
        });
        bus.emit(GameEvent::LaunchSoundPlayed {
            ball: entity.to_bits(),
        });
        info!("Launched ball {} at {:.1}", entity, ball.launch_speed);
    }
}

/// Per-frame ball hook. Launched balls are left to the physics step.
pub fn ball_update(balls: Query<(Entity, &Transform, &Velocity), With<Ball>>) {
    for (entity, transform, velocity) in &balls {
        trace!(
            "ball {} at {:?} moving {:?}",
            entity, transform.translation, velocity.0
        );
    }
}

/// Replace all balls with a fresh one when R is pressed
pub fn respawn_ball_on_key(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    tweaks: Res<LaunchTweaks>,
    assets: Option<Res<BallAssets>>,
    balls: Query<Entity, With<Ball>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    for entity in &balls {
        commands.entity(entity).despawn();
    }

    let sound = assets.map(|a| a.launch_sound.clone()).unwrap_or_default();
    let start = Vec3::new(0.0, tweaks.ball_radius, 0.0);
    let entity = spawn_ball(&mut commands, tweaks.launch_speed, sound, start);
    debug!("Respawned ball {} (speed {:.1})", entity, tweaks.launch_speed);
}
