//! Launch Simulation Tool - headless ball launches
//!
//! Run the launch and velocity systems without rendering and report
//! where each ball ends up.
//!
//! Usage:
//!   cargo run --bin simulate -- --help
//!   cargo run --bin simulate -- --speed 450 --frames 120
//!   cargo run --bin simulate -- --balls 3 --output result.json --log-events

use bowlmaster::simulation::{SimConfig, run_simulation};

fn main() {
    let config = SimConfig::from_args();
    run_simulation(&config);
}
