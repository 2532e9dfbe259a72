//! Field validator
//!
//! The validator applies one field's rules to a raw value and returns a
//! verdict. Checks run in a fixed order (required, minimum length, maximum
//! length, pattern) and stop at the first failure, so a failing verdict
//! carries exactly one message.
//!
//! Copyright (c) 2025 Waitlist Team
//! Licensed under the Apache-2.0 license

use super::rules::is_form_whitespace;
use super::{FieldRule, FieldRuleTable, ValidationResult, ViolationKind};
use serde_json::Value;
use tracing::trace;

/// Applies a rule table to individual field values
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    rules: &'a FieldRuleTable,
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl Validator<'static> {
    /// Validator over the waitlist form's rule table
    pub fn standard() -> Self {
        Self {
            rules: FieldRuleTable::standard(),
        }
    }
}

impl<'a> Validator<'a> {
    pub fn new(rules: &'a FieldRuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'a FieldRuleTable {
        self.rules
    }

    /// Validate one field value; `None` stands for an absent value
    ///
    /// Unknown field names always pass.
    pub fn validate(&self, field_name: &str, value: Option<&str>) -> ValidationResult {
        let Some(rule) = self.rules.get(field_name) else {
            return ValidationResult::pass();
        };

        let verdict = match value {
            None if rule.required => ValidationResult::fail(rule.message_for(ViolationKind::Required)),
            None => ValidationResult::pass(),
            Some(text) => match first_violation(rule, text) {
                Some(kind) => ValidationResult::fail(rule.message_for(kind)),
                None => ValidationResult::pass(),
            },
        };

        trace!(field = field_name, valid = verdict.valid, "Validated field");
        verdict
    }

    /// Validate a structured value after coercing it to text
    pub fn validate_json(&self, field_name: &str, value: &Value) -> ValidationResult {
        let text = coerce_to_text(value);
        self.validate(field_name, text.as_deref())
    }
}

/// First violated check for a present value, in checking order
fn first_violation(rule: &FieldRule, raw: &str) -> Option<ViolationKind> {
    let value = raw.trim_matches(is_form_whitespace);

    if rule.required && value.is_empty() {
        return Some(ViolationKind::Required);
    }

    // Lengths are in UTF-16 code units, as browsers count them
    let length = value.encode_utf16().count();

    if let Some(min) = rule.min_length {
        if length < min {
            return Some(ViolationKind::MinLength);
        }
    }

    if let Some(max) = rule.max_length {
        if length > max {
            return Some(ViolationKind::MaxLength);
        }
    }

    if !rule.matches_pattern(value) {
        return Some(ViolationKind::Pattern);
    }

    None
}

/// Textual form of a structured form value; `null` is treated as absent
///
/// Arrays (multi-value inputs) are joined with commas and every object
/// becomes the fixed text `[object Object]`, so an object never passes a
/// pattern check on the strength of its contents.
pub fn coerce_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| coerce_to_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some("[object Object]".to_string()),
    }
}

/// Validate a field against the standard waitlist rules
pub fn validate_field(field_name: &str, value: Option<&str>) -> ValidationResult {
    Validator::standard().validate(field_name, value)
}
