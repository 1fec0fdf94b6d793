//! Headless pendulum driver
//!
//! Runs the pendulum pair on a background animator at 25 frames per second
//! and logs the latest frame once a second. Set `RUST_LOG=info` (or `debug`,
//! `trace`) to see output.

use std::time::Duration;

use common::{log_equations, Animator, Canvas};
use log::info;
use pendulum::equations::{PENDULUM_EQUATIONS, PENDULUM_VARIABLES};
use pendulum::PendulumDemo;

const FRAME_PACING: Duration = Duration::from_millis(40);
const LOG_EVERY: u64 = 25;

fn main() -> common::Result<()> {
    env_logger::init();
    log_equations("Simple Pendulum", PENDULUM_EQUATIONS, PENDULUM_VARIABLES);

    let demo = PendulumDemo::preset(Canvas::new(800.0, 600.0)?)?;
    let animator = Animator::spawn(demo, FRAME_PACING);

    let mut next = LOG_EVERY;
    loop {
        let Some(frame) = animator.wait_for(next, Duration::from_secs(5)) else {
            if !animator.is_running() {
                log::error!("animator stopped unexpectedly");
                return Ok(());
            }
            continue;
        };
        for (i, pendulum) in frame.geometry.iter().enumerate() {
            let bob = pendulum.arm.end;
            info!(
                "frame {:>6} pendulum {}: mass at ({:.1}, {:.1})",
                frame.index, i, bob.x, bob.y
            );
        }
        for (name, value) in &frame.diagnostics {
            info!("  {} = {:.6}", name, value);
        }
        next = frame.index + LOG_EVERY;
    }
}
