//! Simulation module - headless ball launches
//!
//! Runs the launch and velocity systems without rendering or audio output,
//! reporting where each ball ends up.

pub mod app_builder;
pub mod config;
pub mod runner;

pub use app_builder::HeadlessAppBuilder;
pub use config::SimConfig;
pub use runner::{BallResult, SimResult, run_simulation};
