//! Scalar fields sampled on a uniform 1-D grid

use std::ops::{Index, IndexMut, Range};

use crate::error::{ensure_positive, ConfigError, Result};

/// A fixed-length run of samples of one physical quantity.
///
/// Index 0 and `len() - 1` are the domain boundaries. The length is fixed at
/// construction; the values are mutated in place by the owning model.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    values: Vec<f64>,
    dx: f64,
}

impl ScalarField {
    /// Create a field of `len` zero samples spaced `dx` apart.
    pub fn zeros(len: usize, dx: f64) -> Result<Self> {
        Self::from_fn(len, dx, |_| 0.0)
    }

    /// Create a field whose sample `i` is `f(i)`.
    pub fn from_fn(len: usize, dx: f64, f: impl FnMut(usize) -> f64) -> Result<Self> {
        if len == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let dx = ensure_positive("dx", dx)?;

        Ok(Self {
            values: (0..len).map(f).collect(),
            dx,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Grid spacing
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Position of sample `i` measured from the first sample.
    pub fn x_at(&self, i: usize) -> f64 {
        i as f64 * self.dx
    }

    /// Indices that have a neighbour on both sides.
    pub fn interior(&self) -> Range<usize> {
        1..self.len().saturating_sub(1)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, f64> {
        self.values.iter_mut()
    }

    pub fn fill(&mut self, value: f64) {
        self.values.fill(value);
    }

    /// Largest absolute sample value.
    pub fn max_abs(&self) -> f64 {
        self.values.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }

    /// Rectangle-rule integral over the grid.
    pub fn integral(&self) -> f64 {
        self.values.iter().sum::<f64>() * self.dx
    }
}

impl Index<usize> for ScalarField {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl IndexMut<usize> for ScalarField {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.values[i]
    }
}
