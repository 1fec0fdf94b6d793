//! Per-node boundary and source classification

use common::{ConfigError, Result};

/// Static role of a grid node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Updated by the interior scheme
    Normal,
    /// Held at zero displacement, velocity and tension
    Boundary,
    /// A boundary node whose velocity is driven by the source pulse
    Source,
}

impl NodeKind {
    pub fn is_boundary(self) -> bool {
        matches!(self, NodeKind::Boundary | NodeKind::Source)
    }

    pub fn is_source(self) -> bool {
        self == NodeKind::Source
    }
}

/// Partition `nodes` into leading sources, a normal middle, and a trailing
/// boundary starting at `floor(nodes · boundary_fraction)`.
pub fn classify(
    nodes: usize,
    source_nodes: usize,
    boundary_fraction: f64,
) -> Result<Vec<NodeKind>> {
    if nodes < 2 {
        return Err(ConfigError::GridTooSmall { cells: nodes, min: 2 });
    }
    if !(boundary_fraction > 0.0 && boundary_fraction < 1.0) {
        return Err(ConfigError::OutOfUnitRange {
            name: "boundary_fraction",
            value: boundary_fraction,
        });
    }

    let left = source_nodes;
    let right = (nodes as f64 * boundary_fraction).floor() as usize;
    if left == 0 || left > right || right >= nodes {
        return Err(ConfigError::InvalidPartition { left, right, nodes });
    }

    Ok((0..nodes)
        .map(|i| {
            if i < left {
                NodeKind::Source
            } else if i < right {
                NodeKind::Normal
            } else {
                NodeKind::Boundary
            }
        })
        .collect())
}

/// True when node `i` and its right neighbour are both boundaries; the
/// interior scheme leaves such nodes alone.
pub fn boundary_pair(kinds: &[NodeKind], i: usize) -> bool {
    kinds[i].is_boundary() && kinds[i + 1].is_boundary()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_node_partition() {
        let kinds = classify(10, 1, 0.999).unwrap();
        assert_eq!(kinds[0], NodeKind::Source);
        assert!(kinds[1..9].iter().all(|&k| k == NodeKind::Normal));
        assert_eq!(kinds[9], NodeKind::Boundary);
    }

    #[test]
    fn test_demo_partition() {
        let kinds = classify(3000, 1, 0.999).unwrap();
        assert_eq!(kinds.len(), 3000);
        assert_eq!(kinds.iter().filter(|k| k.is_source()).count(), 1);
        assert_eq!(kinds.iter().filter(|k| k.is_boundary()).count(), 4);
        assert_eq!(kinds[2996], NodeKind::Normal);
        assert_eq!(kinds[2997], NodeKind::Boundary);
    }

    #[test]
    fn test_source_implies_boundary() {
        assert!(NodeKind::Source.is_boundary());
        assert!(NodeKind::Boundary.is_boundary());
        assert!(!NodeKind::Normal.is_boundary());
        assert!(!NodeKind::Boundary.is_source());
    }

    #[test]
    fn test_rejects_bad_partitions() {
        assert_eq!(
            classify(1, 1, 0.999).unwrap_err(),
            ConfigError::GridTooSmall { cells: 1, min: 2 }
        );
        assert!(classify(0, 1, 0.999).is_err());
        assert!(classify(10, 0, 0.999).is_err());
        assert!(classify(10, 1, 1.0).is_err());
        assert!(classify(10, 1, 0.0).is_err());
        assert_eq!(
            classify(10, 8, 0.5).unwrap_err(),
            ConfigError::InvalidPartition { left: 8, right: 5, nodes: 10 }
        );
    }

    #[test]
    fn test_boundary_pair() {
        let kinds = classify(10, 1, 0.8).unwrap();
        assert!(!boundary_pair(&kinds, 0));
        assert!(!boundary_pair(&kinds, 7));
        assert!(boundary_pair(&kinds, 8));
    }
}
