//! Ball launch tuning settings (decoupled from gameplay systems)

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::*;

fn default_launch_speed() -> f32 {
    DEFAULT_LAUNCH_SPEED
}
fn default_ball_radius() -> f32 {
    BALL_RADIUS
}

/// Path to ball tuning config
pub const BALL_TUNING_FILE: &str = "config/ball_tuning.json";

/// Serializable tuning values stored in config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallTuning {
    #[serde(default = "default_launch_speed")]
    pub launch_speed: f32,
    #[serde(default = "default_ball_radius")]
    pub ball_radius: f32,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            launch_speed: default_launch_speed(),
            ball_radius: default_ball_radius(),
        }
    }
}

impl BallTuning {
    pub fn apply_to(&self, tweaks: &mut LaunchTweaks) {
        tweaks.launch_speed = self.launch_speed;
        tweaks.ball_radius = self.ball_radius;
    }
}

/// Runtime launch values, read when a ball is spawned
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LaunchTweaks {
    pub launch_speed: f32,
    pub ball_radius: f32,
}

impl Default for LaunchTweaks {
    fn default() -> Self {
        let defaults = BallTuning::default();
        Self {
            launch_speed: defaults.launch_speed,
            ball_radius: defaults.ball_radius,
        }
    }
}

pub fn load_ball_tuning_from_file(path: &str) -> Result<BallTuning, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path, e))
}

pub fn save_ball_tuning(path: &str, tuning: &BallTuning) -> Result<(), std::io::Error> {
    let json = serde_json::to_string_pretty(tuning)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, json)
}

/// Load tuning from `path`, falling back to defaults (and returning the error) on failure
pub fn apply_ball_tuning_from(path: &str, tweaks: &mut LaunchTweaks) -> Result<(), String> {
    match load_ball_tuning_from_file(path) {
        Ok(tuning) => {
            tuning.apply_to(tweaks);
            Ok(())
        }
        Err(err) => {
            BallTuning::default().apply_to(tweaks);
            Err(err)
        }
    }
}

pub fn apply_ball_tuning(tweaks: &mut LaunchTweaks) -> Result<(), String> {
    apply_ball_tuning_from(BALL_TUNING_FILE, tweaks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("bowlmaster_{}_{}.json", name, std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let mut tweaks = LaunchTweaks {
            launch_speed: 1.0,
            ball_radius: 1.0,
        };
        let result = apply_ball_tuning_from("does/not/exist.json", &mut tweaks);
        assert!(result.is_err());
        assert_eq!(tweaks, LaunchTweaks::default());
    }

    #[test]
    fn test_partial_json_uses_serde_defaults() {
        let tuning: BallTuning = serde_json::from_str(r#"{ "launch_speed": -250.0 }"#).unwrap();
        assert_eq!(tuning.launch_speed, -250.0);
        assert_eq!(tuning.ball_radius, BALL_RADIUS);
    }

    #[test]
    fn test_save_then_load_file() {
        let path = temp_path("save_load");
        let tuning = BallTuning {
            launch_speed: 0.0,
            ball_radius: 12.5,
        };
        save_ball_tuning(&path, &tuning).unwrap();

        let mut tweaks = LaunchTweaks::default();
        apply_ball_tuning_from(&path, &mut tweaks).unwrap();
        assert_eq!(tweaks.launch_speed, 0.0);
        assert_eq!(tweaks.ball_radius, 12.5);
        assert_ne!(tweaks, LaunchTweaks::default());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_json_reports_parse_error() {
        let path = temp_path("malformed");
        fs::write(&path, "{ launch_speed: ").unwrap();

        let err = load_ball_tuning_from_file(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse"));

        let _ = fs::remove_file(&path);
    }
}
