//! Common types and utilities for Contract-Gen
//!
//! This crate contains shared data structures and error types used across the
//! reflect, generator, and CLI components.

mod options;

pub use options::GeneratorOptions;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during container generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Classification of a service method
///
/// A `View` method is read-only; an `Action` method mutates contract state.
/// The classification comes from the `contract.is_view` method option, with
/// an absent option meaning `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodKind {
    Action,
    View,
}

impl MethodKind {
    /// Derive the kind from the raw `is_view` option value
    pub fn from_view_flag(is_view: bool) -> Self {
        if is_view {
            MethodKind::View
        } else {
            MethodKind::Action
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MethodKind::Action => "Action",
            MethodKind::View => "View",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
