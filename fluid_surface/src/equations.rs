//! Equation sheet for the fluid surface demo

use common::Equation;

pub const FLUID_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Depth",
        formula: "h = max(s, b) - b",
        description: "Surface is clamped to the bed first",
    },
    Equation {
        name: "Surface Acceleration",
        formula: "a = g/(2·dx²)·[hᵢ·δ²s + hᵢ₋₁·(sᵢ₋₁ - sᵢ) + hᵢ₊₁·(sᵢ₊₁ - sᵢ)]",
        description: "Depth-weighted curvature, interior cells only",
    },
    Equation {
        name: "Explicit Update",
        formula: "w ← w + a·Δt,  s ← s + w·Δt",
        description: "Fixed Δt = 1e-4 s",
    },
    Equation {
        name: "Gravity Wave Speed",
        formula: "c = √(g·h)",
        description: "Keep c·Δt/dx well below 1",
    },
];

pub const FLUID_VARIABLES: &[(&str, &str)] = &[
    ("s", "Surface height"),
    ("b", "Bed height"),
    ("h", "Fluid depth"),
    ("w", "Vertical surface velocity"),
    ("g", "Gravitational acceleration"),
    ("dx", "Cell width"),
];
