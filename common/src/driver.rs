//! Background frame driver
//!
//! An [`Animator`] owns a simulation on its own thread. Each frame it sleeps
//! for the pacing interval, measures the wall time since the previous frame,
//! calls `update` and then publishes a complete [`Frame`]. Readers only ever
//! see whole frames: the geometry is captured after `update` returns and
//! swapped in under a lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::simulation::Simulation;

/// One published step of a simulation.
#[derive(Debug, Clone)]
pub struct Frame<G> {
    /// Number of updates applied so far, starting at 1.
    pub index: u64,
    /// Wall time passed to `update` for this frame.
    pub elapsed_ms: u64,
    pub geometry: G,
    pub diagnostics: Vec<(String, f64)>,
}

type Slot<G> = Arc<RwLock<Option<Frame<G>>>>;

/// Runs a simulation's update loop on a dedicated thread.
pub struct Animator<G> {
    latest: Slot<G>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl<G: Clone + Send + Sync + 'static> Animator<G> {
    /// Start driving `simulation`, sleeping `pacing` before every frame.
    pub fn spawn<S>(mut simulation: S, pacing: Duration) -> Self
    where
        S: Simulation<Geometry = G> + 'static,
    {
        let latest: Slot<G> = Arc::new(RwLock::new(None));
        let running = Arc::new(AtomicBool::new(true));

        let slot = Arc::clone(&latest);
        let flag = Arc::clone(&running);
        let handle = thread::spawn(move || {
            debug!("animator started, pacing {:?}", pacing);
            let mut last = Instant::now();
            let mut index = 0;

            while flag.load(Ordering::Acquire) {
                if !pacing.is_zero() {
                    thread::sleep(pacing);
                }
                let now = Instant::now();
                let elapsed_ms = now.duration_since(last).as_millis() as u64;
                last = now;

                simulation.update(elapsed_ms);
                index += 1;

                let frame = Frame {
                    index,
                    elapsed_ms,
                    geometry: simulation.geometry(),
                    diagnostics: simulation.diagnostics(),
                };
                trace!("publishing frame {} ({} ms)", index, elapsed_ms);

                match slot.write() {
                    Ok(mut guard) => *guard = Some(frame),
                    Err(poisoned) => *poisoned.into_inner() = Some(frame),
                }
            }
            debug!("animator stopped after {} frames", index);
        });

        Self {
            latest,
            running,
            handle: Some(handle),
        }
    }

    /// Most recently completed frame, if any.
    pub fn latest(&self) -> Option<Frame<G>> {
        match self.latest.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Block until a frame with at least `index` updates is published, or
    /// until `timeout` passes.
    pub fn wait_for(&self, index: u64, timeout: Duration) -> Option<Frame<G>> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(frame) = self.latest().filter(|f| f.index >= index) {
                return Some(frame);
            }
            if Instant::now() >= deadline || !self.is_running() {
                return None;
            }
            thread::sleep(Duration::from_millis(1));
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
            && self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the loop after the frame in progress and return the last frame.
    pub fn stop(mut self) -> Option<Frame<G>> {
        self.shutdown();
        self.latest()
    }

}

impl<G> Animator<G> {
    fn shutdown(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("animator thread panicked");
            }
        }
    }
}

impl<G> Drop for Animator<G> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
