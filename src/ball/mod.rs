//! Ball module - components and launch systems

mod components;
mod launch;

pub use components::*;
pub use launch::*;

// Re-export Velocity from physics since the ball's launch writes it
pub use crate::physics::Velocity;
