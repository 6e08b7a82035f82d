//! Fertil Match - specialist matching service for fertility care
//!
//! This library matches a patient profile (age, region, specialty) against a
//! fixed specialist directory. Matching runs either in process or through an
//! external matcher executable, chosen once per process by [`ExecutionRouter`].

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{Directory, MatchError, MatchSelector, SelectionStrategy, format_summary};
pub use self::models::{MatchQuery, MatchResult, SpecialistRecord};
pub use self::services::{BackendKind, DelegatedMatcher, ExecutionRouter, SpecialistMatcher};
