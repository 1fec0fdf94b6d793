//! The contract every demo exposes to a driver

/// A fixed-step simulation advanced once per frame.
///
/// `update` must leave the model in a fully stepped state before it returns;
/// `geometry` is a read-only snapshot of that state for drawing.
pub trait Simulation: Send {
    /// Owned snapshot of everything a drawing layer needs.
    type Geometry: Clone + Send + Sync + 'static;

    /// Advance one step. `elapsed_ms` is the wall time since the last call;
    /// models with a fixed internal step may ignore it.
    fn update(&mut self, elapsed_ms: u64);

    fn geometry(&self) -> Self::Geometry;

    /// Named scalar readings (energy, volume, ...) for logging.
    fn diagnostics(&self) -> Vec<(String, f64)> {
        Vec::new()
    }
}
