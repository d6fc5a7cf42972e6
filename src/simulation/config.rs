//! Simulation configuration

use serde::{Deserialize, Serialize};

/// Configuration for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Launch speed override (None = use config/ball_tuning.json)
    pub launch_speed: Option<f32>,
    /// Number of updates to run
    pub frames: u32,
    /// Updates per simulated second
    pub fps: f32,
    /// Number of balls, spread across the lane width
    pub balls: u32,
    /// Output file path (None = stdout)
    pub output_file: Option<String>,
    /// Suppress progress output
    pub quiet: bool,
    /// Write an .evlog for the run
    pub log_events: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            launch_speed: None,
            frames: 180, // 3 seconds at 60 fps
            fps: 60.0,
            balls: 1,
            output_file: None,
            quiet: false,
            log_events: false,
        }
    }
}

/// Local simulation settings (gitignored, user's custom settings)
pub const SIM_SETTINGS_FILE: &str = "config/simulation_settings.json";

impl SimConfig {
    /// Load configuration from a JSON settings file
    pub fn from_file(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse {}: {}", path, e))?;
        config.validate().map_err(|e| format!("Invalid {}: {}", path, e))?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(format!("fps must be positive, got {}", self.fps));
        }
        Ok(())
    }

    /// Load configuration from the local settings file, or built-in defaults
    pub fn from_config_files() -> Self {
        Self::from_file(SIM_SETTINGS_FILE).unwrap_or_default()
    }

    /// Parse configuration from command line arguments
    pub fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self::from_arg_list(&args)
    }

    /// Parse configuration from an argument list (first entry is the program name)
    pub fn from_arg_list(args: &[String]) -> Self {
        // Start with config files as base
        let mut config = Self::from_config_files();

        // Check for explicit settings file override
        if let Some(path) = args
            .iter()
            .position(|a| a == "--settings")
            .and_then(|i| args.get(i + 1))
        {
            match Self::from_file(path) {
                Ok(loaded) => config = loaded,
                Err(e) => eprintln!("Warning: {}", e),
            }
        }

        // Then apply command line overrides
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--settings" => {
                    // Already handled above
                    i += 1;
                }
                "--speed" => {
                    if i + 1 < args.len() {
                        config.launch_speed = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--frames" => {
                    if i + 1 < args.len() {
                        config.frames = args[i + 1].parse().unwrap_or(config.frames);
                        i += 1;
                    }
                }
                "--fps" => {
                    if i + 1 < args.len() {
                        config.fps = args[i + 1]
                            .parse()
                            .ok()
                            .filter(|fps: &f32| fps.is_finite() && *fps > 0.0)
                            .unwrap_or(config.fps);
                        i += 1;
                    }
                }
                "--balls" => {
                    if i + 1 < args.len() {
                        config.balls = args[i + 1].parse().unwrap_or(config.balls);
                        i += 1;
                    }
                }
                "--output" | "-o" => {
                    if i + 1 < args.len() {
                        config.output_file = Some(args[i + 1].clone());
                        i += 1;
                    }
                }
                "--quiet" | "-q" => {
                    config.quiet = true;
                }
                "--log-events" => {
                    config.log_events = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Warning: ignoring unknown argument {}", other);
                }
            }
            i += 1;
        }

        config
    }
}

fn print_help() {
    println!(
        r#"Bowlmaster launch simulation

Usage: simulate [OPTIONS]

Options:
  --settings <path>   Load settings from a JSON file
  --speed <f32>       Launch speed (default: config/ball_tuning.json)
  --frames <n>        Number of updates to run (default: 180)
  --fps <f32>         Updates per simulated second (default: 60)
  --balls <n>         Number of balls to launch (default: 1)
  -o, --output <path> Write the JSON result to a file
  -q, --quiet         Suppress progress output
  --log-events        Write an .evlog to logs/
  -h, --help          Show this help"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("simulate")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_cli_overrides() {
        let config = SimConfig::from_arg_list(&args(&[
            "--speed", "-12.5", "--frames", "30", "--balls", "3", "-q",
        ]));
        assert_eq!(config.launch_speed, Some(-12.5));
        assert_eq!(config.frames, 30);
        assert_eq!(config.balls, 3);
        assert!(config.quiet);
    }

    #[test]
    fn test_bad_values_keep_previous() {
        let config = SimConfig::from_arg_list(&args(&["--frames", "lots", "--fps", "0"]));
        let defaults = SimConfig::from_config_files();
        assert_eq!(config.frames, defaults.frames);
        assert_eq!(config.fps, defaults.fps);
    }

    #[test]
    fn test_zero_fps_settings_file_is_rejected() {
        let path = std::env::temp_dir()
            .join(format!("bowlmaster_sim_fps_{}.json", std::process::id()))
            .to_string_lossy()
            .into_owned();
        std::fs::write(&path, r#"{ "fps": 0, "frames": 12 }"#).unwrap();

        let err = SimConfig::from_file(&path).unwrap_err();
        assert!(err.contains("fps must be positive"), "{}", err);

        // --settings with a bad file keeps the previous (valid) config
        let config = SimConfig::from_arg_list(&args(&["--settings", &path]));
        assert!(config.fps > 0.0);
        assert_ne!(config.frames, 12);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_negative_fps_fails_validation() {
        let config = SimConfig {
            fps: -30.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_settings_json() {
        let config: SimConfig = serde_json::from_str(r#"{ "frames": 10 }"#).unwrap();
        assert_eq!(config.frames, 10);
        assert_eq!(config.balls, 1);
        assert!(config.launch_speed.is_none());
    }
}
