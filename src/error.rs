//! Error types for Screenwise
//!
//! The engine has exactly one failure mode: input validation. Every violated
//! constraint is collected before the error is raised, so callers can surface
//! all problems at once instead of one per attempt.

use thiserror::Error;

/// Validation failure carrying every violated constraint, in check order.
///
/// Raised only by the input validator; no other component of the engine
/// fails. Unrecognized categorical values are not violations (they resolve to
/// neutral modifiers downstream).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid prediction input: {}", .violations.join("; "))]
pub struct ValidationError {
    /// Human-readable messages, one per violated constraint
    pub violations: Vec<String>,
}

impl ValidationError {
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }
}
