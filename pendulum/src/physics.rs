//! Pendulum physics
//!
//! Integrates `ω' = -(g/L)·sin θ` with semi-implicit Euler: the angular
//! velocity is updated first and the new value advances the angle. Positions
//! are in canvas coordinates with y pointing down, so θ = 0 hangs straight
//! below the pivot.

use std::f64::consts::PI;

use common::constants::STANDARD_GRAVITY;
use common::{
    ensure_finite, ensure_positive, segment_vertices, Canvas, LineVertex, Result, Segment,
    Simulation,
};
use glam::DVec2;
use log::debug;

/// Step handed to every pendulum regardless of the measured frame time.
pub const FIXED_STEP_MS: u64 = 100;

/// Scale applied to the look-ahead displacement when it is drawn as a
/// velocity vector.
pub const VELOCITY_DISPLAY_SCALE: f64 = 20.0;

/// Mass radius as a fraction of the arm length.
const MASS_RADIUS_FRACTION: f64 = 1.0 / 20.0;

/// Construction parameters for one pendulum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumConfig {
    pub pivot: DVec2,
    pub arm_length: f64,
    pub initial_angle: f64,
    pub gravity: f64,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            pivot: DVec2::new(400.0, 120.0),
            arm_length: 360.0,
            initial_angle: PI / 5.0,
            gravity: STANDARD_GRAVITY,
        }
    }
}

impl PendulumConfig {
    pub fn with_pivot(mut self, pivot: DVec2) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_arm_length(mut self, arm_length: f64) -> Self {
        self.arm_length = arm_length;
        self
    }

    pub fn with_initial_angle(mut self, angle: f64) -> Self {
        self.initial_angle = angle;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("pivot.x", self.pivot.x)?;
        ensure_finite("pivot.y", self.pivot.y)?;
        ensure_positive("arm_length", self.arm_length)?;
        ensure_finite("initial_angle", self.initial_angle)?;
        ensure_positive("gravity", self.gravity)?;
        Ok(())
    }
}

/// A frictionless pendulum with a massless arm
#[derive(Debug, Clone)]
pub struct Pendulum {
    pivot: DVec2,
    arm_length: f64,
    gravity: f64,
    theta: f64,
    omega: f64,
    /// Look-ahead displacement of the mass over one more step, drawing only
    look_ahead: DVec2,
}

impl Pendulum {
    pub fn new(config: PendulumConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "pendulum: L = {}, θ0 = {:.4}, g = {}",
            config.arm_length, config.initial_angle, config.gravity
        );

        Ok(Self {
            pivot: config.pivot,
            arm_length: config.arm_length,
            gravity: config.gravity,
            theta: config.initial_angle,
            omega: 0.0,
            look_ahead: DVec2::ZERO,
        })
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }

    pub fn pivot(&self) -> DVec2 {
        self.pivot
    }

    pub fn arm_length(&self) -> f64 {
        self.arm_length
    }

    /// Unscaled look-ahead displacement `(vx, vy)` of the mass.
    pub fn look_ahead(&self) -> DVec2 {
        self.look_ahead
    }

    /// Offset of the mass from the pivot at angle `theta`.
    fn offset_at(&self, theta: f64) -> DVec2 {
        DVec2::new(self.arm_length * theta.sin(), self.arm_length * theta.cos())
    }

    /// Position of the mass
    pub fn bob_position(&self) -> DVec2 {
        self.pivot + self.offset_at(self.theta)
    }

    pub fn mass_radius(&self) -> f64 {
        self.arm_length * MASS_RADIUS_FRACTION
    }

    /// Advance by `elapsed_ms` milliseconds
    pub fn step(&mut self, elapsed_ms: u64) {
        let dt = elapsed_ms as f64 / 1000.0;
        let k = self.gravity / self.arm_length;

        self.omega -= k * self.theta.sin() * dt;
        self.theta += self.omega * dt;

        // One more step from the new state, used only for the velocity arrow
        let omega2 = self.omega - k * self.theta.sin() * dt;
        let theta2 = self.theta + omega2 * dt;
        self.look_ahead = self.offset_at(theta2) - self.offset_at(self.theta);
    }

    /// Mechanical energy per unit mass, zero at rest hanging straight down
    pub fn energy(&self) -> f64 {
        let l = self.arm_length;
        0.5 * l * l * self.omega * self.omega + self.gravity * l * (1.0 - self.theta.cos())
    }

    pub fn geometry(&self) -> PendulumGeometry {
        let bob = self.bob_position();
        PendulumGeometry {
            arm: Segment::new(self.pivot, bob),
            velocity: Segment::new(bob, bob + self.look_ahead * VELOCITY_DISPLAY_SCALE),
            mass_radius: self.mass_radius(),
        }
    }
}

/// What a drawing layer needs for one pendulum, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumGeometry {
    /// Pivot to mass
    pub arm: Segment,
    /// Scaled velocity arrow starting at the mass
    pub velocity: Segment,
    pub mass_radius: f64,
}

impl PendulumGeometry {
    /// Arm and velocity arrow as a line list.
    pub fn to_vertices(&self) -> Vec<LineVertex> {
        segment_vertices(&[self.arm, self.velocity])
    }
}

/// The pendulum pair shown by the demo
pub struct PendulumDemo {
    pub pendulums: Vec<Pendulum>,
}

impl PendulumDemo {
    pub fn from_configs(configs: impl IntoIterator<Item = PendulumConfig>) -> Result<Self> {
        let pendulums = configs
            .into_iter()
            .map(Pendulum::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { pendulums })
    }

    /// Two pendulums on a shared pivot, released from π/5 and π/2.
    pub fn preset(canvas: Canvas) -> Result<Self> {
        let base = PendulumConfig::default()
            .with_pivot(canvas.at(0.5, 0.2))
            .with_arm_length(canvas.height * 0.6);

        Self::from_configs([
            base.with_initial_angle(PI / 5.0),
            base.with_initial_angle(PI / 2.0),
        ])
    }
}

impl Simulation for PendulumDemo {
    type Geometry = Vec<PendulumGeometry>;

    /// The measured frame time is ignored so the pendulums advance at the
    /// same simulated rate on any machine.
    fn update(&mut self, _elapsed_ms: u64) {
        for pendulum in &mut self.pendulums {
            pendulum.step(FIXED_STEP_MS);
        }
    }

    fn geometry(&self) -> Vec<PendulumGeometry> {
        self.pendulums.iter().map(Pendulum::geometry).collect()
    }

    fn diagnostics(&self) -> Vec<(String, f64)> {
        self.pendulums
            .iter()
            .enumerate()
            .flat_map(|(i, p)| {
                [
                    (format!("theta[{i}]"), p.theta()),
                    (format!("energy[{i}]"), p.energy()),
                ]
            })
            .collect()
    }
}
