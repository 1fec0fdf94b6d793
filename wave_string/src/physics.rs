//! Wave string physics
//!
//! The 1-D wave equation is split into a velocity field `v` and a tension
//! field `T` that are advanced against each other, with displacement `u`
//! integrated from the velocity. One step runs, in this order:
//!
//! 1. source injection at the leading source nodes while the pulse is live,
//! 2. in-place sweep over interior nodes, left to right:
//!    `vᵢ = (vᵢ₋₁ + vᵢ₊₁)/2 + c·Δt/dx·(Tᵢ₊₁ - Tᵢ)`,
//!    `Tᵢ = (Tᵢ₋₁ + Tᵢ₊₁)/2 + c·Δt/dx·(vᵢ₊₁ - vᵢ)`,
//! 3. `uᵢ += vᵢ·Δt` on non-boundary nodes,
//! 4. `Tᵢ = c·(uᵢ₊₁ - uᵢ₋₁)/(2·dx)` over the same interior nodes,
//! 5. zero `u`, `v` and `T` on every boundary node.
//!
//! Reordering these changes the pulse shape.

use std::f64::consts::PI;

use common::{
    ensure_finite, ensure_positive, polyline_vertices, Canvas, ConfigError, LineVertex, Result,
    ScalarField, Simulation,
};
use glam::DVec2;
use log::debug;
use rayon::prelude::*;

use crate::nodes::{boundary_pair, classify, NodeKind};

/// Grid nodes per demo string
pub const DEFAULT_NODES: usize = 3000;

/// Internal integration step in seconds
pub const TIME_STEP: f64 = 1e-4;

/// Propagation speed along the string
pub const WAVE_SPEED: f64 = 200.0;

/// Peak velocity imposed on the source nodes
pub const SOURCE_AMPLITUDE: f64 = 150_000.0;

/// Updates per half period of the pulse, i.e. a phase increment of π/180
pub const PULSE_STEPS: u32 = 180;

/// Strings shown by the demo
pub const DEMO_STRINGS: usize = 5;

/// A single raised-sine pulse: `A·sin(φ)` for φ from 0 up to π, then silent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcePulse {
    step: u32,
    steps: u32,
    amplitude: f64,
}

impl SourcePulse {
    pub fn new(amplitude: f64, steps: u32) -> Self {
        Self {
            step: 0,
            steps,
            amplitude,
        }
    }

    /// Current phase; reaches exactly π once the pulse is spent.
    pub fn phase(&self) -> f64 {
        PI * (self.step as f64 / self.steps as f64)
    }

    pub fn increment(&self) -> f64 {
        PI / self.steps as f64
    }

    pub fn is_active(&self) -> bool {
        self.step < self.steps
    }

    /// Source velocity for this update, advancing the phase, or `None`
    /// once the phase has reached π.
    pub fn next_velocity(&mut self) -> Option<f64> {
        if !self.is_active() {
            return None;
        }
        let v = self.amplitude * self.phase().sin();
        self.step += 1;
        Some(v)
    }
}

/// Construction parameters for one string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveStringConfig {
    /// Left end of the string at rest
    pub start: DVec2,
    /// Right end; only its x coordinate sets the length
    pub end: DVec2,
    pub nodes: usize,
    pub wave_speed: f64,
    pub dt: f64,
    pub amplitude: f64,
    pub pulse_steps: u32,
    /// Leading nodes that are both boundary and source
    pub source_nodes: usize,
    /// Nodes from `floor(nodes · boundary_fraction)` on are boundary
    pub boundary_fraction: f64,
}

impl Default for WaveStringConfig {
    fn default() -> Self {
        Self {
            start: DVec2::new(162.4, 307.2),
            end: DVec2::new(1461.6, 307.2),
            nodes: DEFAULT_NODES,
            wave_speed: WAVE_SPEED,
            dt: TIME_STEP,
            amplitude: SOURCE_AMPLITUDE,
            pulse_steps: PULSE_STEPS,
            source_nodes: 1,
            boundary_fraction: 0.999,
        }
    }
}

impl WaveStringConfig {
    pub fn with_span(mut self, start: DVec2, end: DVec2) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_nodes(mut self, nodes: usize) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_boundary_fraction(mut self, fraction: f64) -> Self {
        self.boundary_fraction = fraction;
        self
    }

    /// Node spacing
    pub fn dx(&self) -> f64 {
        (self.end.x - self.start.x) / self.nodes as f64
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("start.y", self.start.y)?;
        ensure_positive("wave_speed", self.wave_speed)?;
        ensure_positive("dt", self.dt)?;
        ensure_finite("amplitude", self.amplitude)?;
        if self.pulse_steps == 0 {
            return Err(ConfigError::ZeroCount { name: "pulse_steps" });
        }
        if self.nodes > 0 {
            ensure_positive("dx", self.dx())?;
        }
        Ok(())
    }
}

/// One string with its fields and fixed node classification
#[derive(Debug, Clone)]
pub struct WaveString {
    displacement: ScalarField,
    velocity: ScalarField,
    tension: ScalarField,
    kinds: Vec<NodeKind>,
    origin: DVec2,
    wave_speed: f64,
    dt: f64,
    pulse: SourcePulse,
}

impl WaveString {
    pub fn new(config: WaveStringConfig) -> Result<Self> {
        config.validate()?;
        let kinds = classify(config.nodes, config.source_nodes, config.boundary_fraction)?;
        let dx = config.dx();
        debug!(
            "wave string: {} nodes, dx = {:.4}, courant = {:.4}",
            config.nodes,
            dx,
            config.wave_speed * config.dt / dx
        );

        Ok(Self {
            displacement: ScalarField::zeros(config.nodes, dx)?,
            velocity: ScalarField::zeros(config.nodes, dx)?,
            tension: ScalarField::zeros(config.nodes, dx)?,
            kinds,
            origin: config.start,
            wave_speed: config.wave_speed,
            dt: config.dt,
            pulse: SourcePulse::new(config.amplitude, config.pulse_steps),
        })
    }

    pub fn displacement(&self) -> &ScalarField {
        &self.displacement
    }

    pub fn velocity(&self) -> &ScalarField {
        &self.velocity
    }

    pub fn tension(&self) -> &ScalarField {
        &self.tension
    }

    pub fn kinds(&self) -> &[NodeKind] {
        &self.kinds
    }

    pub fn pulse(&self) -> &SourcePulse {
        &self.pulse
    }

    pub fn source_phase(&self) -> f64 {
        self.pulse.phase()
    }

    pub fn cell_width(&self) -> f64 {
        self.displacement.dx()
    }

    /// `c·Δt/dx` for this string
    pub fn courant_number(&self) -> f64 {
        self.wave_speed * self.dt / self.cell_width()
    }

    pub fn max_displacement(&self) -> f64 {
        self.displacement.max_abs()
    }

    fn inject_source(&mut self) {
        let Some(v) = self.pulse.next_velocity() else {
            return;
        };
        let sources = self
            .kinds
            .iter()
            .zip(self.velocity.iter_mut())
            .take_while(|(kind, _)| kind.is_source());
        for (_, velocity) in sources {
            *velocity = v;
        }
    }

    /// Advance one fixed step
    pub fn step(&mut self) {
        self.inject_source();

        let n = self.kinds.len();
        let dx = self.cell_width();
        let dt = self.dt;
        let c = self.wave_speed;
        let coupling = c * (dt / dx);

        let kinds = &self.kinds;
        let u = self.displacement.as_mut_slice();
        let v = self.velocity.as_mut_slice();
        let t = self.tension.as_mut_slice();

        // Sequential sweep: each node sees its left neighbour's new values
        for i in 1..n - 1 {
            if boundary_pair(kinds, i) {
                continue;
            }
            v[i] = (v[i - 1] + v[i + 1]) / 2.0 + coupling * (t[i + 1] - t[i]);
            t[i] = (t[i - 1] + t[i + 1]) / 2.0 + coupling * (v[i + 1] - v[i]);
        }

        for ((u, &v), kind) in u.iter_mut().zip(v.iter()).zip(kinds) {
            if !kind.is_boundary() {
                *u += v * dt;
            }
        }

        for i in 1..n - 1 {
            if boundary_pair(kinds, i) {
                continue;
            }
            t[i] = c * (u[i + 1] - u[i - 1]) / (2.0 * dx);
        }

        self.enforce_boundaries();
    }

    fn enforce_boundaries(&mut self) {
        let fields = self
            .displacement
            .iter_mut()
            .zip(self.velocity.iter_mut())
            .zip(self.tension.iter_mut());
        for (((u, v), t), kind) in fields.zip(&self.kinds) {
            if kind.is_boundary() {
                *u = 0.0;
                *v = 0.0;
                *t = 0.0;
            }
        }
    }

    pub fn geometry(&self) -> WaveGeometry {
        let dx = self.cell_width();
        let points = self
            .displacement
            .iter()
            .enumerate()
            .map(|(i, &u)| DVec2::new(self.origin.x + i as f64 * dx, self.origin.y - u))
            .collect();

        WaveGeometry {
            origin: self.origin,
            cell_width: dx,
            points,
        }
    }
}

/// Polyline of one string in canvas coordinates (y down, displacement up)
#[derive(Debug, Clone, PartialEq)]
pub struct WaveGeometry {
    pub origin: DVec2,
    pub cell_width: f64,
    pub points: Vec<DVec2>,
}

impl WaveGeometry {
    pub fn to_vertices(&self) -> Vec<LineVertex> {
        polyline_vertices(&self.points)
    }
}

/// The stack of strings shown by the demo
pub struct WaveStringDemo {
    pub strings: Vec<WaveString>,
}

impl WaveStringDemo {
    pub fn from_configs(configs: impl IntoIterator<Item = WaveStringConfig>) -> Result<Self> {
        let strings = configs
            .into_iter()
            .map(WaveString::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { strings })
    }

    /// Five strings spanning the middle 80% of the canvas, stacked from 40%
    /// of its height down in 10% steps.
    pub fn preset(canvas: Canvas) -> Result<Self> {
        Self::from_configs((0..DEMO_STRINGS).map(|i| {
            let fy = (4 + i) as f64 / 10.0;
            WaveStringConfig::default().with_span(canvas.at(0.1, fy), canvas.at(0.9, fy))
        }))
    }
}

impl Simulation for WaveStringDemo {
    type Geometry = Vec<WaveGeometry>;

    /// Physical time is governed by the internal step, not the frame time.
    /// Strings share nothing, so they step in parallel.
    fn update(&mut self, _elapsed_ms: u64) {
        self.strings.par_iter_mut().for_each(WaveString::step);
    }

    fn geometry(&self) -> Vec<WaveGeometry> {
        self.strings.iter().map(WaveString::geometry).collect()
    }

    fn diagnostics(&self) -> Vec<(String, f64)> {
        let mut readings = vec![(
            "source_phase".to_string(),
            self.strings.first().map_or(0.0, WaveString::source_phase),
        )];
        readings.extend(
            self.strings
                .iter()
                .enumerate()
                .map(|(i, s)| (format!("max_displacement[{i}]"), s.max_displacement())),
        );
        readings
    }
}
