//! Longevity assessment core: questionnaire, scoring, recommendations, and the
//! notification pipeline shared by the HTTP backend and the terminal wizard.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
