//! Compact text format for game event serialization
//!
//! Format: `T:NNNNN|CODE|data...`
//! - T:NNNNN = timestamp in milliseconds (5 digits, wraps at 99999)
//! - CODE = event type code
//! - data = pipe-separated values specific to event type
//!
//! Examples:
//! ```text
//! T:00000|SE|9b1d...|20261015_142301
//! T:00000|CF|{"launch_speed":500.0,"ball_radius":10.0}
//! T:00016|BS|4|0.0,10.0,0.0|500.0
//! T:00016|BL|4|0.0,0.0,500.0
//! T:00016|AS|4
//! T:00100|T|6|4|0.0,10.0,50.0|0.0,0.0,500.0
//! ```

use super::types::GameEvent;

/// Format a 3D vector tuple with 1 decimal
fn fmt_vec3(v: (f32, f32, f32)) -> String {
    format!("{:.1},{:.1},{:.1}", v.0, v.1, v.2)
}

/// Serialize a GameEvent to compact text format
pub fn serialize_event(time_ms: u32, event: &GameEvent) -> String {
    let ts = format!("T:{:05}", time_ms % 100000);
    let code = event.type_code();

    let data = match event {
        GameEvent::SessionStart {
            session_id,
            timestamp,
        } => format!("{}|{}", session_id, timestamp),
        GameEvent::Config(config) => {
            // Compact JSON for easy parsing
            serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string())
        }
        GameEvent::SessionEnd { duration } => format!("{:.1}", duration),
        GameEvent::BallSpawned {
            ball,
            pos,
            launch_speed,
        } => format!("{}|{}|{:.1}", ball, fmt_vec3(*pos), launch_speed),
        GameEvent::BallLaunched { ball, velocity } => {
            format!("{}|{}", ball, fmt_vec3(*velocity))
        }
        GameEvent::LaunchSoundPlayed { ball } => ball.to_string(),
        GameEvent::Tick {
            frame,
            ball,
            pos,
            vel,
        } => format!("{}|{}|{}|{}", frame, ball, fmt_vec3(*pos), fmt_vec3(*vel)),
    };

    format!("{}|{}|{}", ts, code, data)
}
