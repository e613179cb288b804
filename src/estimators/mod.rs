// src/estimators/mod.rs

// High-level estimators that compose systems into caller-facing answers.
// Each estimator is feature-gated so downstream tools enable only what they use.

#[cfg(feature = "estimator-castle")]
pub mod castle;

#[cfg(feature = "estimator-castle")]
pub use castle::*;
