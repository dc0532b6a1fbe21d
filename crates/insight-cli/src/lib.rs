//! CLI library components for the insight engine.

pub mod logging;
pub mod settings;
