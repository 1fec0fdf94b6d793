//! Equation sheet for the wave string demo

use common::Equation;

pub const WAVE_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Wave Equation",
        formula: "∂²u/∂t² = c²·∂²u/∂x²",
        description: "Split into velocity v = ∂u/∂t and tension T = c·∂u/∂x",
    },
    Equation {
        name: "Velocity Update",
        formula: "vᵢ = (vᵢ₋₁ + vᵢ₊₁)/2 + c·Δt/dx·(Tᵢ₊₁ - Tᵢ)",
        description: "Swept left to right in place",
    },
    Equation {
        name: "Tension Update",
        formula: "Tᵢ = (Tᵢ₋₁ + Tᵢ₊₁)/2 + c·Δt/dx·(vᵢ₊₁ - vᵢ)",
        description: "Then recomputed as c·(uᵢ₊₁ - uᵢ₋₁)/(2·dx)",
    },
    Equation {
        name: "Source Pulse",
        formula: "v₀ = A·sin φ,  φ ← φ + π/180 while φ < π",
        description: "One raised-sine pulse per run",
    },
];

pub const WAVE_VARIABLES: &[(&str, &str)] = &[
    ("u", "Displacement"),
    ("v", "Transverse velocity"),
    ("T", "Tension"),
    ("c", "Wave speed"),
    ("A", "Source amplitude"),
    ("φ", "Source phase"),
];
