//! Headless fluid surface driver
//!
//! Steps both columns as fast as the machine allows and logs the latest
//! frame periodically. Set `RUST_LOG=info` to see output.

use std::time::Duration;

use common::{log_equations, Animator, Canvas};
use fluid_surface::equations::{FLUID_EQUATIONS, FLUID_VARIABLES};
use fluid_surface::FluidSurfaceDemo;
use log::info;

const LOG_EVERY: u64 = 10_000;

fn main() -> common::Result<()> {
    env_logger::init();
    log_equations("Shallow-Water Fluid Surface", FLUID_EQUATIONS, FLUID_VARIABLES);

    let demo = FluidSurfaceDemo::preset(Canvas::new(1624.0, 768.0)?)?;
    let animator = Animator::spawn(demo, Duration::ZERO);

    let mut next = LOG_EVERY;
    loop {
        let Some(frame) = animator.wait_for(next, Duration::from_secs(5)) else {
            if !animator.is_running() {
                log::error!("animator stopped unexpectedly");
                return Ok(());
            }
            continue;
        };
        for (i, column) in frame.geometry.iter().enumerate() {
            let crest = column
                .outline
                .iter()
                .fold(f64::NEG_INFINITY, |acc, p| acc.max(p.y));
            info!("frame {:>8} column {}: crest {:.3}", frame.index, i, crest);
        }
        for (name, value) in &frame.diagnostics {
            info!("  {} = {:.6}", name, value);
        }
        next = frame.index + LOG_EVERY;
    }
}
