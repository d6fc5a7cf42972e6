//! Event logger for session analytics
//!
//! Writes every bus event of a game or simulation run to a `.evlog` file.

use bevy::prelude::*;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use uuid::Uuid;

use super::bus::EventBus;
use super::format::serialize_event;
use super::types::{GameEvent, LaunchConfig};
use crate::ball::Ball;
use crate::physics::Velocity;

/// Configuration for event logging
#[derive(Resource, Clone)]
pub struct EventLogConfig {
    /// Directory for log files
    pub log_dir: PathBuf,
    /// Whether logging is enabled
    pub enabled: bool,
    /// Sample rate for tick events (every N ms, 0 = disabled)
    pub tick_sample_ms: u32,
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            enabled: true,
            tick_sample_ms: 100, // Sample every 100ms
        }
    }
}

impl EventLogConfig {
    /// Logging switched off (tests, quiet simulation)
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

/// Active event logger with file handle
#[derive(Resource)]
pub struct EventLogger {
    writer: Option<BufWriter<File>>,
    session_id: String,
    path: Option<PathBuf>,
    last_tick_time: f32,
    frame: u32,
    config: EventLogConfig,
}

impl EventLogger {
    /// Create a new event logger (but don't open file yet)
    pub fn new(config: EventLogConfig) -> Self {
        Self {
            writer: None,
            session_id: String::new(),
            path: None,
            last_tick_time: 0.0,
            frame: 0,
            config,
        }
    }

    /// Start a new log session
    /// Generates a new UUID for this session and logs SessionStart event
    pub fn start_session(&mut self, timestamp: &str) {
        if !self.config.enabled {
            return;
        }

        self.session_id = Uuid::new_v4().to_string();

        if let Err(e) = std::fs::create_dir_all(&self.config.log_dir) {
            warn!("Failed to create log directory: {}", e);
            return;
        }

        // Use session_id in filename for uniqueness
        let filename = format!("{}_{}.evlog", timestamp, &self.session_id[..8]);
        let path = self.config.log_dir.join(filename);

        match OpenOptions::new().create(true).write(true).truncate(true).open(&path) {
            Ok(file) => {
                self.writer = Some(BufWriter::new(file));
                self.last_tick_time = 0.0;
                self.frame = 0;
                info!("Event logging started: {} (session: {})", path.display(), &self.session_id[..8]);
                self.path = Some(path);

                self.log(0, &GameEvent::SessionStart {
                    session_id: self.session_id.clone(),
                    timestamp: timestamp.to_string(),
                });
            }
            Err(e) => {
                warn!("Failed to open event log: {}", e);
            }
        }
    }

    /// Log the launch configuration (call after start_session)
    pub fn log_config(&mut self, config: LaunchConfig) {
        self.log(0, &GameEvent::Config(config));
    }

    /// Path of the open log file, if any
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    /// End the current log session
    pub fn end_session(&mut self, duration: f32) {
        let time_ms = (duration * 1000.0) as u32;
        self.log(time_ms, &GameEvent::SessionEnd { duration });
        if let Some(mut writer) = self.writer.take()
            && let Err(e) = writer.flush()
        {
            warn!("Failed to flush event log: {}", e);
        }
    }

    /// Log an event
    pub fn log(&mut self, time_ms: u32, event: &GameEvent) {
        let Some(writer) = &mut self.writer else {
            return;
        };

        let line = serialize_event(time_ms, event);
        if let Err(e) = writeln!(writer, "{}", line) {
            warn!("Failed to write event: {}", e);
        }
    }

    /// Check if a tick event should be logged (based on sample rate)
    pub fn should_log_tick(&mut self, time: f32) -> bool {
        if self.config.tick_sample_ms == 0 {
            return false;
        }
        let interval = self.config.tick_sample_ms as f32 / 1000.0;
        if time - self.last_tick_time >= interval {
            self.last_tick_time = time;
            true
        } else {
            false
        }
    }

    /// Check if logging is active
    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new(EventLogConfig::default())
    }
}

/// Emit sampled Tick events for every ball
pub fn sample_ball_ticks(
    time: Res<Time>,
    mut logger: ResMut<EventLogger>,
    mut bus: ResMut<EventBus>,
    balls: Query<(Entity, &Transform, &Velocity), With<Ball>>,
) {
    logger.frame = logger.frame.wrapping_add(1);
    if !logger.is_active() || !logger.should_log_tick(time.elapsed_secs()) {
        return;
    }
    let frame = logger.frame;
    for (entity, transform, velocity) in &balls {
        let pos = transform.translation;
        bus.emit(GameEvent::Tick {
            frame,
            ball: entity.to_bits(),
            pos: (pos.x, pos.y, pos.z),
            vel: (velocity.0.x, velocity.0.y, velocity.0.z),
        });
    }
}

/// Drain the event bus into the log file
pub fn flush_event_bus(mut bus: ResMut<EventBus>, mut logger: ResMut<EventLogger>) {
    let events = bus.drain();
    for bus_event in &events {
        logger.log(bus_event.time_ms, &bus_event.event);
    }
    bus.clear_processed();
}
