//! Config file auto-reload system
//!
//! Polls the ball tuning file every few seconds and reloads it when modified.
//! Reloaded values apply to balls spawned afterwards; launched balls keep
//! their velocity.

use bevy::prelude::*;
use std::fs;
use std::time::SystemTime;

use crate::tuning::{BALL_TUNING_FILE, LaunchTweaks, load_ball_tuning_from_file};

/// How often to check for config changes (seconds)
const CHECK_INTERVAL: f32 = 2.0;

/// Tracks modification time of the tuning file for hot-reload
#[derive(Resource)]
pub struct ConfigWatcher {
    /// Time since last check
    pub timer: f32,
    /// File being watched
    pub path: String,
    /// Last known modification time
    pub tuning_mtime: Option<SystemTime>,
}

impl Default for ConfigWatcher {
    fn default() -> Self {
        Self::for_path(BALL_TUNING_FILE)
    }
}

impl ConfigWatcher {
    pub fn for_path(path: &str) -> Self {
        Self {
            timer: 0.0,
            path: path.to_string(),
            tuning_mtime: get_mtime(path),
        }
    }

    /// Record the current mtime and report whether it moved since the last poll
    pub fn poll_changed(&mut self) -> bool {
        let mtime = get_mtime(&self.path);
        if mtime.is_some() && mtime != self.tuning_mtime {
            self.tuning_mtime = mtime;
            true
        } else {
            false
        }
    }
}

/// Get file modification time, or None if file doesn't exist
fn get_mtime(path: &str) -> Option<SystemTime> {
    fs::metadata(path).ok().and_then(|m| m.modified().ok())
}

/// Check for tuning file changes and reload as needed.
pub fn check_config_changes(
    time: Res<Time>,
    mut watcher: ResMut<ConfigWatcher>,
    mut tweaks: ResMut<LaunchTweaks>,
) {
    watcher.timer += time.delta_secs();

    if watcher.timer < CHECK_INTERVAL {
        return;
    }
    watcher.timer = 0.0;

    if !watcher.poll_changed() {
        return;
    }

    match load_ball_tuning_from_file(&watcher.path) {
        Ok(tuning) => {
            tuning.apply_to(&mut tweaks);
            info!(
                "Reloaded {} (launch speed {:.1})",
                watcher.path, tweaks.launch_speed
            );
        }
        Err(e) => warn!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::{Ball, LaunchSoundPlayback};
    use crate::physics::Velocity;
    use crate::simulation::HeadlessAppBuilder;
    use crate::tuning::{BallTuning, save_ball_tuning};

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("bowlmaster_{}_{}.json", name, std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_missing_file_never_reports_change() {
        let mut watcher = ConfigWatcher::for_path("does/not/exist.json");
        assert!(watcher.tuning_mtime.is_none());
        assert!(!watcher.poll_changed());
    }

    #[test]
    fn test_new_file_is_picked_up_once() {
        let path = temp_path("watch");
        let _ = fs::remove_file(&path);

        let mut watcher = ConfigWatcher::for_path(&path);
        save_ball_tuning(&path, &BallTuning::default()).unwrap();

        assert!(watcher.poll_changed());
        assert!(!watcher.poll_changed());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_reload_leaves_launched_ball_alone() {
        let path = temp_path("watch_app");
        let _ = fs::remove_file(&path);

        let mut app = HeadlessAppBuilder::new().with_fps(10.0).build();
        app.insert_resource(ConfigWatcher::for_path(&path));
        app.add_systems(Update, check_config_changes);

        let launched = app.world_mut().spawn(Ball::new(100.0)).id();
        app.update();

        save_ball_tuning(
            &path,
            &BallTuning {
                launch_speed: 250.0,
                ..Default::default()
            },
        )
        .unwrap();

        // 0.1s per update, well past one check interval
        for _ in 0..25 {
            app.update();
        }

        assert_eq!(app.world().resource::<LaunchTweaks>().launch_speed, 250.0);
        assert_eq!(
            app.world().get::<Velocity>(launched).unwrap().0,
            Vec3::new(0.0, 0.0, 100.0)
        );

        // Balls spawned after the reload pick up the new speed
        let speed = app.world().resource::<LaunchTweaks>().launch_speed;
        let fresh = app.world_mut().spawn(Ball::new(speed)).id();
        app.update();
        assert_eq!(
            app.world().get::<Velocity>(fresh).unwrap().0,
            Vec3::new(0.0, 0.0, 250.0)
        );
        let sounds = app
            .world_mut()
            .query::<&LaunchSoundPlayback>()
            .iter(app.world())
            .count();
        assert_eq!(sounds, 2);

        let _ = fs::remove_file(&path);
    }
}
