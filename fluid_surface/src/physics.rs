//! Shallow-water column physics
//!
//! Each column samples the free surface `s`, the bed `b`, the vertical
//! surface velocity `w` and the depth `h = s - b` on a uniform grid. One step:
//!
//! 1. clamp the surface to the bed and recompute the depth,
//! 2. accelerate every interior cell by the depth-weighted curvature of the
//!    surface,
//!    `a = g/(2·dx²)·[h_i·(s_{i-1} - 2s_i + s_{i+1})
//!         + h_{i-1}·(s_{i-1} - s_i) + h_{i+1}·(s_{i+1} - s_i)]`,
//! 3. move the surface by `w·dt`.
//!
//! The end cells are never accelerated, so they hold their initial height.
//! `dt` and `dx` are fixed at construction; the scheme is only stable while
//! `√(g·h_max)·dt/dx` stays small, which the defaults satisfy by a wide margin.

use common::constants::STANDARD_GRAVITY;
use common::{
    ensure_finite, ensure_positive, polyline_vertices, Canvas, ConfigError, LineVertex, Result,
    ScalarField, Simulation, ViewTransform,
};
use glam::DVec2;
use log::debug;

use crate::profile::BedProfile;

/// Grid cells per column
pub const DEFAULT_CELLS: usize = 300;

/// Internal integration step in seconds
pub const TIME_STEP: f64 = 1e-4;

/// Construction parameters for one fluid column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidColumnConfig {
    /// Top-left corner of the column on the canvas
    pub origin: DVec2,
    pub width: f64,
    pub height: f64,
    pub cells: usize,
    pub profile: BedProfile,
    pub gravity: f64,
    pub dt: f64,
}

impl Default for FluidColumnConfig {
    fn default() -> Self {
        Self {
            origin: DVec2::ZERO,
            width: 649.0,
            height: 460.0,
            cells: DEFAULT_CELLS,
            profile: BedProfile::SinusoidalBed,
            gravity: STANDARD_GRAVITY,
            dt: TIME_STEP,
        }
    }
}

impl FluidColumnConfig {
    pub fn with_origin(mut self, origin: DVec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_cells(mut self, cells: usize) -> Self {
        self.cells = cells;
        self
    }

    pub fn with_profile(mut self, profile: BedProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Select the profile by its configuration index.
    pub fn with_profile_index(self, index: usize) -> Result<Self> {
        Ok(self.with_profile(BedProfile::from_index(index)?))
    }

    pub fn validate(&self) -> Result<()> {
        if self.cells == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        ensure_finite("origin.x", self.origin.x)?;
        ensure_finite("origin.y", self.origin.y)?;
        ensure_positive("width", self.width)?;
        ensure_positive("height", self.height)?;
        ensure_positive("gravity", self.gravity)?;
        ensure_positive("dt", self.dt)?;
        Ok(())
    }

    /// Cell width
    pub fn dx(&self) -> f64 {
        self.width / self.cells as f64
    }
}

/// One shallow-water column
#[derive(Debug, Clone)]
pub struct FluidColumn {
    surface: ScalarField,
    bed: ScalarField,
    vertical_velocity: ScalarField,
    depth: ScalarField,
    view: ViewTransform,
    gravity: f64,
    dt: f64,
}

impl FluidColumn {
    /// Build a column from its profile generator.
    pub fn new(config: FluidColumnConfig) -> Result<Self> {
        config.validate()?;
        let FluidColumnConfig {
            cells,
            height,
            profile,
            ..
        } = config;

        let surface =
            ScalarField::from_fn(cells, config.dx(), |i| profile.surface_at(i, cells, height))?;
        let bed = ScalarField::from_fn(cells, config.dx(), |i| profile.bed_at(i, cells, height))?;
        debug!(
            "fluid column: {:?}, {} cells, dx = {:.4}",
            profile,
            cells,
            config.dx()
        );
        Self::assemble(config, surface, bed)
    }

    /// Build a column from explicit surface and bed samples.
    pub fn from_samples(config: FluidColumnConfig, surface: &[f64], bed: &[f64]) -> Result<Self> {
        config.validate()?;
        for (name, samples) in [("surface", surface), ("bed", bed)] {
            if samples.len() != config.cells {
                return Err(ConfigError::LengthMismatch {
                    name,
                    expected: config.cells,
                    found: samples.len(),
                });
            }
            for &value in samples {
                ensure_finite(name, value)?;
            }
        }

        let surface = ScalarField::from_fn(config.cells, config.dx(), |i| surface[i])?;
        let bed = ScalarField::from_fn(config.cells, config.dx(), |i| bed[i])?;
        Self::assemble(config, surface, bed)
    }

    fn assemble(config: FluidColumnConfig, surface: ScalarField, bed: ScalarField) -> Result<Self> {
        let dx = config.dx();
        let mut column = Self {
            surface,
            bed,
            vertical_velocity: ScalarField::zeros(config.cells, dx)?,
            depth: ScalarField::zeros(config.cells, dx)?,
            view: ViewTransform::new(config.origin, config.height),
            gravity: config.gravity,
            dt: config.dt,
        };
        column.clamp_to_bed();
        Ok(column)
    }

    pub fn surface(&self) -> &ScalarField {
        &self.surface
    }

    pub fn bed(&self) -> &ScalarField {
        &self.bed
    }

    pub fn vertical_velocity(&self) -> &ScalarField {
        &self.vertical_velocity
    }

    pub fn depth(&self) -> &ScalarField {
        &self.depth
    }

    pub fn cell_width(&self) -> f64 {
        self.surface.dx()
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Lift any surface sample below the bed onto it and refresh the depth.
    fn clamp_to_bed(&mut self) {
        let samples = self
            .surface
            .iter_mut()
            .zip(self.bed.iter())
            .zip(self.depth.iter_mut());
        for ((s, &b), h) in samples {
            if *s < b {
                *s = b;
            }
            *h = *s - b;
        }
    }

    /// Advance one fixed step
    pub fn step(&mut self) {
        self.clamp_to_bed();

        let dx = self.surface.dx();
        let dt = self.dt;
        let g = self.gravity;
        let s = self.surface.as_slice();
        let h = self.depth.as_slice();
        let interior = self.vertical_velocity.interior();
        let w = self.vertical_velocity.as_mut_slice();

        for i in interior {
            let mut accel = h[i] * (s[i - 1] - 2.0 * s[i] + s[i + 1]);
            accel += h[i - 1] * (s[i - 1] - s[i]);
            accel += h[i + 1] * (s[i + 1] - s[i]);
            accel /= 2.0 * dx * dx;
            accel *= g;

            w[i] += accel * dt;
        }

        for (s, &w) in self.surface.iter_mut().zip(self.vertical_velocity.iter()) {
            *s += w * dt;
        }

        // Publish a state that already satisfies s >= b; the next step's
        // clamp is then a no-op, so the trajectory is unchanged.
        self.clamp_to_bed();
    }

    /// Fluid volume per unit length across the column
    pub fn volume(&self) -> f64 {
        self.depth.integral()
    }

    /// `√(g·h_max)·dt/dx`, the gravity-wave Courant number for the current depth
    pub fn gravity_wave_courant(&self) -> f64 {
        (self.gravity * self.depth.max_abs()).sqrt() * self.dt / self.cell_width()
    }

    pub fn geometry(&self) -> FluidGeometry {
        let dx = self.cell_width();
        let n = self.surface.len();
        let x_at = |i: usize| i as f64 * dx;

        let mut outline = Vec::with_capacity(2 * n + 1);
        outline.push(DVec2::new(0.0, self.bed[0]));
        outline.extend((0..n).map(|i| DVec2::new(x_at(i), self.surface[i])));
        outline.extend((0..n).rev().map(|i| DVec2::new(x_at(i), self.bed[i])));

        let mut bed_outline = Vec::with_capacity(n + 2);
        bed_outline.push(DVec2::ZERO);
        bed_outline.extend((0..n).map(|i| DVec2::new(x_at(i), self.bed[i])));
        bed_outline.push(DVec2::new(x_at(n - 1), 0.0));

        FluidGeometry {
            view: self.view,
            cell_width: dx,
            outline,
            bed_outline,
        }
    }
}

/// Closed outlines of one column in model coordinates (y up from the
/// bottom of the domain)
#[derive(Debug, Clone, PartialEq)]
pub struct FluidGeometry {
    pub view: ViewTransform,
    pub cell_width: f64,
    /// Fluid region: surface left to right, then bed right to left
    pub outline: Vec<DVec2>,
    /// Solid bed down to the floor of the domain
    pub bed_outline: Vec<DVec2>,
}

impl FluidGeometry {
    /// Map model points into canvas coordinates.
    pub fn to_view(&self, points: &[DVec2]) -> Vec<DVec2> {
        points.iter().map(|&p| self.view.to_view(p)).collect()
    }

    /// Fluid outline in canvas coordinates, ready for upload.
    pub fn fluid_vertices(&self) -> Vec<LineVertex> {
        polyline_vertices(&self.to_view(&self.outline))
    }

    /// Bed outline in canvas coordinates, ready for upload.
    pub fn bed_vertices(&self) -> Vec<LineVertex> {
        polyline_vertices(&self.to_view(&self.bed_outline))
    }
}

/// The two columns shown by the demo
pub struct FluidSurfaceDemo {
    pub columns: Vec<FluidColumn>,
}

impl FluidSurfaceDemo {
    pub fn from_configs(configs: impl IntoIterator<Item = FluidColumnConfig>) -> Result<Self> {
        let columns = configs
            .into_iter()
            .map(FluidColumn::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { columns })
    }

    /// Side-by-side columns, sinusoidal bed on the left and flat bed on the right.
    pub fn preset(canvas: Canvas) -> Result<Self> {
        let origin = canvas.at(0.05, 0.2);
        let width = (canvas.width * 0.4).floor();
        let height = (canvas.height * 0.6).floor();
        let base = FluidColumnConfig::default().with_size(width, height);

        Self::from_configs([
            base.with_origin(origin).with_profile_index(0)?,
            base.with_origin(DVec2::new(origin.x * 2.0 + width, origin.y))
                .with_profile_index(1)?,
        ])
    }
}

impl Simulation for FluidSurfaceDemo {
    type Geometry = Vec<FluidGeometry>;

    /// Physical time is governed by the internal step, not the frame time.
    fn update(&mut self, _elapsed_ms: u64) {
        for column in &mut self.columns {
            column.step();
        }
    }

    fn geometry(&self) -> Vec<FluidGeometry> {
        self.columns.iter().map(FluidColumn::geometry).collect()
    }

    fn diagnostics(&self) -> Vec<(String, f64)> {
        self.columns
            .iter()
            .enumerate()
            .flat_map(|(i, c)| {
                [
                    (format!("volume[{i}]"), c.volume()),
                    (format!("courant[{i}]"), c.gravity_wave_courant()),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_config() -> FluidColumnConfig {
        FluidColumnConfig::default().with_size(10.0, 10.0).with_cells(10)
    }

    #[test]
    fn test_rejects_bad_config() {
        assert_eq!(
            FluidColumn::new(FluidColumnConfig::default().with_cells(0)).unwrap_err(),
            ConfigError::EmptyGrid
        );
        assert!(FluidColumn::new(FluidColumnConfig::default().with_size(0.0, 10.0)).is_err());
        assert!(FluidColumn::new(FluidColumnConfig::default().with_size(10.0, -1.0)).is_err());
        assert_eq!(
            FluidColumnConfig::default().with_profile_index(5).unwrap_err(),
            ConfigError::UnknownProfile(5)
        );
    }

    #[test]
    fn test_from_samples_checks_length() {
        let err = FluidColumn::from_samples(small_config(), &[1.0; 9], &[0.0; 10]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LengthMismatch { name: "surface", expected: 10, found: 9 }
        );
    }

    #[test]
    fn test_from_samples_rejects_non_finite() {
        let mut surface = [1.0; 4];
        surface[0] = f64::NAN;
        let config = small_config().with_cells(4);
        assert!(matches!(
            FluidColumn::from_samples(config, &surface, &[0.0; 4]),
            Err(ConfigError::NotFinite { name: "surface", .. })
        ));

        let mut bed = [0.0; 4];
        bed[2] = f64::NEG_INFINITY;
        assert_eq!(
            FluidColumn::from_samples(config, &[1.0; 4], &bed).unwrap_err(),
            ConfigError::NotFinite { name: "bed", value: f64::NEG_INFINITY }
        );
        assert!(FluidColumn::from_samples(config, &[f64::INFINITY; 4], &[0.0; 4]).is_err());
    }

    #[test]
    fn test_default_grid() {
        let column = FluidColumn::new(FluidColumnConfig::default()).unwrap();
        assert_eq!(column.surface().len(), DEFAULT_CELLS);
        assert_relative_eq!(column.cell_width(), 649.0 / 300.0);
        assert_eq!(column.dt(), TIME_STEP);
        assert!(column.gravity_wave_courant() < 0.01);
    }

    #[test]
    fn test_depth_is_surface_minus_bed() {
        let column = FluidColumn::new(FluidColumnConfig::default()).unwrap();
        for i in 0..column.depth().len() {
            assert_relative_eq!(column.depth()[i], column.surface()[i] - column.bed()[i]);
        }
    }

    #[test]
    fn test_surface_below_bed_is_clamped() {
        let bed = [2.0; 10];
        let surface = [1.0, 3.0, 1.5, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.0];
        let column = FluidColumn::from_samples(small_config(), &surface, &bed).unwrap();
        assert_eq!(column.surface()[0], 2.0);
        assert_eq!(column.surface()[2], 2.0);
        assert_eq!(column.surface()[9], 2.0);
        assert_eq!(column.depth()[0], 0.0);
        assert_eq!(column.depth()[1], 1.0);
    }

    #[test]
    fn test_still_water_stays_still() {
        let config = small_config();
        let bed: Vec<f64> = (0..10).map(|i| (i as f64 * 0.7).sin() + 1.0).collect();
        let surface = [5.0; 10];
        let mut column = FluidColumn::from_samples(config, &surface, &bed).unwrap();

        for _ in 0..1000 {
            column.step();
        }
        assert!(column.surface().iter().all(|&s| s == 5.0));
        assert!(column.vertical_velocity().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_dry_bed_is_stable() {
        let bed: Vec<f64> = (0..10).map(|i| i as f64 * 0.5).collect();
        let mut column = FluidColumn::from_samples(small_config(), &bed, &bed).unwrap();
        for _ in 0..100 {
            column.step();
        }
        assert_eq!(column.surface().as_slice(), bed.as_slice());
        assert_eq!(column.volume(), 0.0);
    }

    #[test]
    fn test_end_cells_never_accelerated() {
        let mut column = FluidColumn::new(FluidColumnConfig::default()).unwrap();
        let first = column.surface()[0];
        let last = column.surface()[DEFAULT_CELLS - 1];
        for _ in 0..500 {
            column.step();
        }
        assert_eq!(column.vertical_velocity()[0], 0.0);
        assert_eq!(column.vertical_velocity()[DEFAULT_CELLS - 1], 0.0);
        assert_eq!(column.surface()[0], first);
        assert_eq!(column.surface()[DEFAULT_CELLS - 1], last);
    }

    #[test]
    fn test_crest_falls() {
        let mut surface = [5.0; 10];
        surface[5] = 6.0;
        let mut column = FluidColumn::from_samples(small_config(), &surface, &[0.0; 10]).unwrap();
        column.step();
        assert!(column.vertical_velocity()[5] < 0.0);
        assert!(column.vertical_velocity()[4] > 0.0);
        assert!(column.vertical_velocity()[6] > 0.0);
        assert!(column.surface()[5] < 6.0);
    }

    #[test]
    fn test_geometry_outlines() {
        let column = FluidColumn::new(small_config().with_origin(DVec2::new(50.0, 20.0))).unwrap();
        let geometry = column.geometry();

        assert_eq!(geometry.outline.len(), 21);
        assert_eq!(geometry.outline[0], DVec2::new(0.0, column.bed()[0]));
        assert_eq!(geometry.outline[1], DVec2::new(0.0, column.surface()[0]));
        assert_eq!(geometry.outline[20], DVec2::new(0.0, column.bed()[0]));
        assert_eq!(geometry.bed_outline.len(), 12);
        assert_eq!(geometry.bed_outline[11], DVec2::new(9.0, 0.0));

        let view = geometry.to_view(&[DVec2::new(2.0, 10.0)]);
        assert_eq!(view[0], DVec2::new(52.0, 20.0));
        assert_eq!(geometry.fluid_vertices().len(), 21);
        assert_eq!(geometry.bed_vertices().len(), 12);
    }

    #[test]
    fn test_preset_layout() {
        let demo = FluidSurfaceDemo::preset(Canvas::new(1624.0, 768.0).unwrap()).unwrap();
        assert_eq!(demo.columns.len(), 2);

        let left = demo.columns[0].geometry();
        let right = demo.columns[1].geometry();
        assert_relative_eq!(left.view.origin.x, 81.2, epsilon = 1e-9);
        assert_relative_eq!(left.view.height, 460.0);
        assert_relative_eq!(right.view.origin.x, 81.2 * 2.0 + 649.0, epsilon = 1e-9);
        assert!(demo.columns[1].bed().iter().all(|&b| b == 0.0));
        let labels: Vec<String> = demo.diagnostics().into_iter().map(|(name, _)| name).collect();
        assert_eq!(labels, ["volume[0]", "courant[0]", "volume[1]", "courant[1]"]);
    }
}
