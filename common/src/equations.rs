//! Equation sheets describing each simulation's update rule
//!
//! Each demo publishes the equations it integrates together with a glossary
//! of its symbols; drivers log them at start-up.

use log::info;

/// An equation with its name and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Log an equation sheet at info level.
pub fn log_equations(title: &str, equations: &[Equation], variables: &[(&str, &str)]) {
    info!("{}", title);
    for eq in equations {
        info!("  {:<28} {}", eq.name, eq.formula);
        info!("  {:<28} ({})", "", eq.description);
    }
    for (symbol, meaning) in variables {
        info!("    {:<8} {}", symbol, meaning);
    }
}
