//! Headless App Builder
//!
//! Provides a reusable builder for creating headless Bevy apps.
//! Used by the simulation runner and by tests.

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use crate::ball::{ball_update, launch_new_balls};
use crate::events::{
    EventBus, EventLogConfig, EventLogger, flush_event_bus, sample_ball_ticks,
    update_event_bus_time,
};
use crate::physics::apply_velocity;
use crate::tuning::{self, LaunchTweaks};

/// Builder for creating headless Bevy apps
pub struct HeadlessAppBuilder {
    fps: f32,
    minimal_threads: bool,
    load_tuning: bool,
    logging: bool,
    event_log: EventLogConfig,
}

impl Default for HeadlessAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessAppBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            fps: 60.0,
            minimal_threads: false,
            load_tuning: false,
            logging: false,
            event_log: EventLogConfig::disabled(),
        }
    }

    /// Set the target FPS (default: 60). Each update advances time by 1/fps.
    /// Non-positive or non-finite values are ignored.
    pub fn with_fps(mut self, fps: f32) -> Self {
        if fps.is_finite() && fps > 0.0 {
            self.fps = fps;
        } else {
            warn!("Ignoring invalid fps {}, keeping {}", fps, self.fps);
        }
        self
    }

    /// Enable minimal thread mode (task pools = 1)
    pub fn with_minimal_threads(mut self) -> Self {
        self.minimal_threads = true;
        self
    }

    /// Read `LaunchTweaks` from the tuning file instead of using defaults
    pub fn with_tuning_file(mut self) -> Self {
        self.load_tuning = true;
        self
    }

    /// Install Bevy's LogPlugin (only once per process)
    pub fn with_logging(mut self) -> Self {
        self.logging = true;
        self
    }

    /// Write bus events to an .evlog file
    pub fn with_event_log(mut self, config: EventLogConfig) -> Self {
        self.event_log = config;
        self
    }

    /// Build the app with minimal plugins, ball systems and common resources
    ///
    /// The returned app has:
    /// - MinimalPlugins with a fixed time step of 1/fps per update
    /// - TransformPlugin for GlobalTransform propagation
    /// - EventBus, EventLogger and LaunchTweaks resources
    /// - Ball launch, velocity integration and per-frame hook systems
    pub fn build(self) -> App {
        let mut app = App::new();
        let frame = Duration::from_secs_f32(1.0 / self.fps);

        if self.minimal_threads {
            app.add_plugins(
                MinimalPlugins
                    .set(ScheduleRunnerPlugin::run_loop(frame))
                    .set(TaskPoolPlugin {
                        task_pool_options: TaskPoolOptions::with_num_threads(1),
                    }),
            );
        } else {
            app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(frame)));
        }
        if self.logging {
            app.add_plugins(LogPlugin::default());
        }
        app.add_plugins(bevy::transform::TransformPlugin);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(frame));

        app.init_resource::<LaunchTweaks>();
        if self.load_tuning
            && let Err(err) =
                tuning::apply_ball_tuning(&mut app.world_mut().resource_mut::<LaunchTweaks>())
        {
            warn!("{}", err);
        }

        app.insert_resource(EventBus::new());
        app.insert_resource(EventLogger::new(self.event_log));

        app.add_systems(
            Update,
            (
                update_event_bus_time,
                launch_new_balls,
                apply_velocity,
                ball_update,
                sample_ball_ticks,
                flush_event_bus,
            )
                .chain(),
        );

        app
    }
}
