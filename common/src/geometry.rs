//! Render geometry handed from the simulations to a drawing layer

use glam::DVec2;

use crate::error::{ensure_positive, Result};

/// Size of the drawing surface a demo lays its instances out on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            width: ensure_positive("canvas width", width)?,
            height: ensure_positive("canvas height", height)?,
        })
    }

    /// Point at the given fractions of the canvas width and height.
    pub fn at(&self, fx: f64, fy: f64) -> DVec2 {
        DVec2::new(self.width * fx, self.height * fy)
    }
}

/// A straight line between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Maps model coordinates (y up, origin at the bottom left of the domain)
/// into view coordinates (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub origin: DVec2,
    pub height: f64,
}

impl ViewTransform {
    pub fn new(origin: DVec2, height: f64) -> Self {
        Self { origin, height }
    }

    pub fn to_view(&self, p: DVec2) -> DVec2 {
        DVec2::new(self.origin.x + p.x, self.origin.y + self.height - p.y)
    }
}

/// Vertex with a 2D position, ready for upload to a GPU vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
}

impl LineVertex {
    pub fn new(p: DVec2) -> Self {
        let p = p.as_vec2();
        Self {
            position: [p.x, p.y],
        }
    }
}

/// Convert a polyline into vertices for a line-strip draw.
pub fn polyline_vertices(points: &[DVec2]) -> Vec<LineVertex> {
    points.iter().copied().map(LineVertex::new).collect()
}

/// Convert segments into vertex pairs for a line-list draw.
pub fn segment_vertices(segments: &[Segment]) -> Vec<LineVertex> {
    segments
        .iter()
        .flat_map(|s| [LineVertex::new(s.start), LineVertex::new(s.end)])
        .collect()
}
