//! Event Bus - central hub for cross-module communication
//!
//! The EventBus decouples systems that produce ball events from
//! the consumers that react to them or write them to the event log:
//! - Ball systems emit BallLaunched / LaunchSoundPlayed events
//! - The logger drains the bus into the session's .evlog file

use bevy::prelude::*;
use std::collections::HashMap;

use super::types::GameEvent;

/// Timestamped event for the event bus
#[derive(Debug, Clone)]
pub struct BusEvent {
    /// Time in milliseconds since session start
    pub time_ms: u32,
    /// The event data
    pub event: GameEvent,
}

/// Central event bus for cross-module communication
#[derive(Resource, Default)]
pub struct EventBus {
    /// Events emitted this frame, waiting to be consumed
    pending: Vec<BusEvent>,

    /// Events that have been consumed (for logging)
    processed: Vec<BusEvent>,

    /// Current elapsed time in milliseconds (for timestamping)
    elapsed_ms: u32,

    /// Whether the bus is enabled (for testing/simulation)
    enabled: bool,

    /// Running total of emitted events per type code
    emitted: HashMap<&'static str, usize>,
}

impl EventBus {
    /// Create a new enabled event bus
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Create a disabled event bus (events are dropped)
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Update the elapsed time (called each frame)
    pub fn update_time(&mut self, elapsed_secs: f32) {
        self.elapsed_ms = (elapsed_secs * 1000.0) as u32;
    }

    /// Emit an event to the bus
    pub fn emit(&mut self, event: GameEvent) {
        if !self.enabled {
            return;
        }
        *self.emitted.entry(event.type_code()).or_default() += 1;
        self.pending.push(BusEvent {
            time_ms: self.elapsed_ms,
            event,
        });
    }

    /// Drain pending events, moving them to processed
    pub fn drain(&mut self) -> Vec<BusEvent> {
        let events = std::mem::take(&mut self.pending);
        self.processed.extend(events.clone());
        events
    }

    /// Get all processed events
    pub fn processed(&self) -> &[BusEvent] {
        &self.processed
    }

    /// Clear processed events (after writing them to the event log)
    pub fn clear_processed(&mut self) {
        self.processed.clear();
    }

    /// Get the number of pending events
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Check if the bus has any pending events
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Check if the bus is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Total events of a type (by `GameEvent::type_code`) emitted since creation.
    /// Unaffected by draining or clearing.
    pub fn emitted_count(&self, type_code: &str) -> usize {
        self.emitted.get(type_code).copied().unwrap_or(0)
    }
}

/// System to update the event bus time each frame
pub fn update_event_bus_time(mut bus: ResMut<EventBus>, time: Res<Time>) {
    bus.update_time(time.elapsed_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_and_drain() {
        let mut bus = EventBus::new();
        bus.update_time(1.5);

        bus.emit(GameEvent::LaunchSoundPlayed { ball: 3 });

        assert_eq!(bus.pending_count(), 1);
        assert!(bus.has_pending());

        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time_ms, 1500);
        assert_eq!(bus.pending_count(), 0);
        assert_eq!(bus.processed().len(), 1);
    }

    #[test]
    fn test_disabled_bus() {
        let mut bus = EventBus::disabled();
        bus.emit(GameEvent::SessionEnd { duration: 1.0 });
        assert_eq!(bus.pending_count(), 0);
        assert!(!bus.is_enabled());
    }

    #[test]
    fn test_emitted_count_survives_clearing() {
        let mut bus = EventBus::new();
        bus.emit(GameEvent::LaunchSoundPlayed { ball: 1 });
        bus.drain();
        bus.clear_processed();
        bus.emit(GameEvent::LaunchSoundPlayed { ball: 2 });
        bus.emit(GameEvent::BallLaunched {
            ball: 2,
            velocity: (0.0, 0.0, 1.0),
        });
        bus.drain();
        bus.clear_processed();

        assert!(bus.processed().is_empty());
        assert_eq!(bus.emitted_count("AS"), 2);
        assert_eq!(bus.emitted_count("BL"), 1);
        assert_eq!(bus.emitted_count("T"), 0);
    }

    #[test]
    fn test_disabled_bus_counts_nothing() {
        let mut bus = EventBus::disabled();
        bus.emit(GameEvent::LaunchSoundPlayed { ball: 1 });
        assert_eq!(bus.emitted_count("AS"), 0);
    }
}
