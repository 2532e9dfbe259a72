//! Field validation for the waitlist form
//!
//! Validation never fails with an error: every input, including unknown
//! field names and absent values, produces a well-formed verdict.
//!
//! The validator is organized into focused modules:
//! - `types`: the verdict and violation kinds
//! - `rules`: the static per-field rule table
//! - `core`: the validator that applies rules to values
//! - `tests`: scenario tests for the standard rules
//!
//! Copyright (c) 2025 Waitlist Team
//! Licensed under the Apache-2.0 license

pub mod types;
pub mod rules;
pub mod core;

// Re-export public API
pub use types::{ValidationResult, ViolationKind};
pub use rules::{is_form_whitespace, FieldRule, FieldRuleBuilder, FieldRuleTable};
pub use core::{coerce_to_text, validate_field, Validator};
