//! SwapMatch - Skill-exchange matching engine for the SkillSwap directory
//!
//! This library ranks candidate profiles for a requester by how well their
//! teach and learn skills complement each other. The engine is a pure,
//! stateless pipeline: normalization, exact and related match detection,
//! compatibility scoring, explanation, and ranking.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Matcher, Taxonomy, normalize};
pub use crate::models::{Profile, MatchRecord, MatchResult, Direction, MatchKind, CompatibilityTier, ScoringWeights};
