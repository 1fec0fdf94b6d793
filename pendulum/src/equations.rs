//! Equation sheet for the pendulum demo

use common::Equation;

pub const PENDULUM_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Equation of Motion",
        formula: "θ'' = -(g/L)·sin θ",
        description: "Frictionless simple pendulum",
    },
    Equation {
        name: "Semi-implicit Euler",
        formula: "ω ← ω - (g/L)·sin θ·Δt,  θ ← θ + ω·Δt",
        description: "Velocity first, then angle from the new velocity",
    },
    Equation {
        name: "Mass Position",
        formula: "x = L·sin θ,  y = L·cos θ",
        description: "Canvas coordinates, y pointing down",
    },
    Equation {
        name: "Energy per Unit Mass",
        formula: "E = ½·L²·ω² + g·L·(1 - cos θ)",
        description: "Drifts slowly under the first-order scheme",
    },
];

pub const PENDULUM_VARIABLES: &[(&str, &str)] = &[
    ("θ", "Angle from the vertical"),
    ("ω", "Angular velocity"),
    ("g", "Gravitational acceleration"),
    ("L", "Arm length"),
    ("Δt", "Fixed 100 ms step"),
];
