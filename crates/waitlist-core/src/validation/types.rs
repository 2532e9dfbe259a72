//! Core validation types
//!
//! This module contains the verdict returned for every validated field and
//! the four kinds of rule violation a field can report.
//!
//! Copyright (c) 2025 Waitlist Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of rule violation, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationKind {
    /// Value is absent or blank after trimming
    Required,
    /// Trimmed value is shorter than the configured minimum
    MinLength,
    /// Trimmed value is longer than the configured maximum
    MaxLength,
    /// Trimmed value does not fully match the configured pattern
    Pattern,
}

impl ViolationKind {
    /// All kinds in checking order
    pub const ALL: [ViolationKind; 4] = [
        ViolationKind::Required,
        ViolationKind::MinLength,
        ViolationKind::MaxLength,
        ViolationKind::Pattern,
    ];
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Required => write!(f, "required"),
            ViolationKind::MinLength => write!(f, "minLength"),
            ViolationKind::MaxLength => write!(f, "maxLength"),
            ViolationKind::Pattern => write!(f, "pattern"),
        }
    }
}

/// Verdict for a single field value
///
/// `message` is empty exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// A passing verdict
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing verdict carrying one human-readable message
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::pass()
    }
}
