//! Velocity integration
//!
//! Bodies carry a `Velocity`; `apply_velocity` moves their `Transform` each frame.
//! There is no collision response here.

use bevy::prelude::*;

use crate::constants::MIN_PHYSICS_DT;

/// Linear velocity in world units per second
#[derive(Component, Default, Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec3);

/// Physics step for a frame delta. A zero delta (the first headless frame)
/// takes one minimum step; any other delta is used as-is.
pub fn step_dt(delta: f32) -> f32 {
    if delta > 0.0 { delta } else { MIN_PHYSICS_DT }
}

/// Apply velocity to all entities with Velocity component
pub fn apply_velocity(mut query: Query<(&mut Transform, &Velocity)>, time: Res<Time>) {
    let dt = step_dt(time.delta_secs());

    for (mut transform, velocity) in &mut query {
        transform.translation += velocity.0 * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_velocity_moves_transform() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, apply_velocity);

        let entity = app
            .world_mut()
            .spawn((Transform::default(), Velocity(Vec3::new(0.0, 0.0, 60.0))))
            .id();

        app.update();

        let z = app.world().get::<Transform>(entity).unwrap().translation.z;
        // At least one minimum step along +Z, never sideways
        assert!(z >= 60.0 * MIN_PHYSICS_DT - 1e-4);
        let translation = app.world().get::<Transform>(entity).unwrap().translation;
        assert_eq!(translation.x, 0.0);
        assert_eq!(translation.y, 0.0);
    }

    #[test]
    fn test_step_dt_keeps_real_delta() {
        assert_eq!(step_dt(0.0), MIN_PHYSICS_DT);
        assert_eq!(step_dt(1.0 / 120.0), 1.0 / 120.0);
        assert_eq!(step_dt(1.0 / 30.0), 1.0 / 30.0);
    }

    #[test]
    fn test_zero_velocity_stays_put() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, apply_velocity);

        let entity = app
            .world_mut()
            .spawn((Transform::from_xyz(1.0, 2.0, 3.0), Velocity::default()))
            .id();

        for _ in 0..5 {
            app.update();
        }

        assert_eq!(
            app.world().get::<Transform>(entity).unwrap().translation,
            Vec3::new(1.0, 2.0, 3.0)
        );
    }
}
