//! Game event logging system for analytics
//!
//! Provides a compact text format for logging ball and session events.
//! Used by the game binary and headless simulation runs.

mod bus;
mod format;
mod logger;
mod types;

pub use bus::{BusEvent, EventBus, update_event_bus_time};
pub use format::serialize_event;
pub use logger::{EventLogConfig, EventLogger, flush_event_bus, sample_ball_ticks};
pub use types::{GameEvent, LaunchConfig};
