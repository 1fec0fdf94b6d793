//! Headless wave string driver
//!
//! Steps the five strings as fast as the machine allows and logs the latest
//! frame periodically. Set `RUST_LOG=info` to see output.

use std::time::Duration;

use common::{log_equations, Animator, Canvas};
use log::info;
use wave_string::equations::{WAVE_EQUATIONS, WAVE_VARIABLES};
use wave_string::WaveStringDemo;

const LOG_EVERY: u64 = 500;

fn main() -> common::Result<()> {
    env_logger::init();
    log_equations("Wave Strings", WAVE_EQUATIONS, WAVE_VARIABLES);

    let demo = WaveStringDemo::preset(Canvas::new(1624.0, 768.0)?)?;
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
        info!("frame {:>8} ({} ms since previous)", frame.index, frame.elapsed_ms);
        for (name, value) in &frame.diagnostics {
            info!("  {} = {:.4}", name, value);
        }
        next = frame.index + LOG_EVERY;
    }
}
