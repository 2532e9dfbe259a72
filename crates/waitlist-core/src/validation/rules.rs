//! Static field rules for the waitlist form
//!
//! This module holds the rule table consulted by the validator: per-field
//! presence, length and pattern constraints together with the message shown
//! for each kind of violation.
//!
//! Copyright (c) 2025 Waitlist Team
//! Licensed under the Apache-2.0 license

use super::ViolationKind;
use crate::{Error, Result};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Body of a character class matching exactly the chars accepted by
/// [`is_form_whitespace`]
macro_rules! form_whitespace_class {
    () => {
        r"\t\n\x0B\x0C\r\x20\x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}"
    };
}

/// Letters, whitespace, hyphens and apostrophes, at least one character
const PERSON_NAME_PATTERN: &str = concat!(r"^[A-Za-z", form_whitespace_class!(), r"'\-]+$");

/// local@domain.tld where no part contains whitespace or '@'
const EMAIL_PATTERN: &str = concat!(
    r"^[^",
    form_whitespace_class!(),
    r"@]+@[^",
    form_whitespace_class!(),
    r"@]+\.[^",
    form_whitespace_class!(),
    r"@]+$"
);

/// Whitespace as browsers treat it in form input: the ASCII controls
/// U+0009 to U+000D, space, no-break space, the Unicode space separators,
/// the line and paragraph separators and the byte order mark.
///
/// U+0085 (next line) is not included.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

static STANDARD_RULES: OnceLock<FieldRuleTable> = OnceLock::new();

/// Constraints and messages for a single field
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_pattern"
    )]
    pub pattern: Option<Regex>,
    pub messages: BTreeMap<ViolationKind, String>,
}

impl FieldRule {
    /// Start building a rule; nothing is required until stated
    pub fn builder() -> FieldRuleBuilder {
        FieldRuleBuilder::default()
    }

    /// Message for a violation kind, falling back to a generic wording when
    /// the rule carries none
    pub fn message_for(&self, kind: ViolationKind) -> &str {
        self.messages
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| default_message(kind))
    }

    /// Whether the pattern accepts the whole of `value`
    pub fn matches_pattern(&self, value: &str) -> bool {
        self.pattern.as_ref().map_or(true, |re| re.is_match(value))
    }
}

fn default_message(kind: ViolationKind) -> &'static str {
    match kind {
        ViolationKind::Required => "This field is required",
        ViolationKind::MinLength => "This field is too short",
        ViolationKind::MaxLength => "This field is too long",
        ViolationKind::Pattern => "This field has an invalid format",
    }
}

fn serialize_pattern<S>(pattern: &Option<Regex>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match pattern {
        Some(re) => serializer.serialize_str(re.as_str()),
        None => serializer.serialize_none(),
    }
}

/// Builder for [`FieldRule`]
#[derive(Debug, Default)]
pub struct FieldRuleBuilder {
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
    messages: BTreeMap<ViolationKind, String>,
}

impl FieldRuleBuilder {
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.messages.insert(ViolationKind::Required, message.into());
        self
    }

    pub fn min_length(mut self, length: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(length);
        self.messages.insert(ViolationKind::MinLength, message.into());
        self
    }

    pub fn max_length(mut self, length: usize, message: impl Into<String>) -> Self {
        self.max_length = Some(length);
        self.messages.insert(ViolationKind::MaxLength, message.into());
        self
    }

    /// Attach a pattern; fails if `pattern` is not a valid regular expression
    pub fn pattern(mut self, pattern: &str, message: impl Into<String>) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|e| Error::Configuration {
            message: format!("Invalid field pattern '{}': {}", pattern, e),
            source: Some(anyhow::Error::new(e)),
        })?;
        self.pattern = Some(re);
        self.messages.insert(ViolationKind::Pattern, message.into());
        Ok(self)
    }

    /// Finish the rule, rejecting inverted length bounds
    pub fn build(self) -> Result<FieldRule> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(Error::configuration(format!(
                    "minLength {} exceeds maxLength {}",
                    min, max
                )));
            }
        }

        Ok(FieldRule {
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            pattern: self.pattern,
            messages: self.messages,
        })
    }
}

/// Read-only mapping from field name to its rule
///
/// A name with no entry is a legitimate state meaning no constraints apply.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FieldRuleTable {
    rules: BTreeMap<String, FieldRule>,
}

impl FieldRuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rule for a field
    pub fn with_rule(mut self, field_name: impl Into<String>, rule: FieldRule) -> Self {
        self.rules.insert(field_name.into(), rule);
        self
    }

    pub fn get(&self, field_name: &str) -> Option<&FieldRule> {
        self.rules.get(field_name)
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.rules.contains_key(field_name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rule set of the waitlist signup form, built once per process
    pub fn standard() -> &'static FieldRuleTable {
        STANDARD_RULES.get_or_init(build_standard_rules)
    }
}

fn person_name_rule(label: &str) -> FieldRule {
    FieldRule::builder()
        .required(format!("{} is required", label))
        .min_length(2, format!("{} must be at least 2 characters", label))
        .max_length(50, format!("{} must be less than 50 characters", label))
        .pattern(
            PERSON_NAME_PATTERN,
            format!(
                "{} can only contain letters, spaces, hyphens, and apostrophes",
                label
            ),
        )
        .and_then(FieldRuleBuilder::build)
        // patterns and bounds are compile-time constants
        .expect("person name rule is statically valid")
}

fn email_rule() -> FieldRule {
    FieldRule::builder()
        .required("Email is required")
        .pattern(EMAIL_PATTERN, "Please enter a valid email address")
        .and_then(FieldRuleBuilder::build)
        // patterns are compile-time constants
        .expect("email rule is statically valid")
}

fn build_standard_rules() -> FieldRuleTable {
    FieldRuleTable::new()
        .with_rule("firstName", person_name_rule("First name"))
        .with_rule("lastName", person_name_rule("Last name"))
        .with_rule("email", email_rule())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_has_three_fields() {
        let table = FieldRuleTable::standard();
        assert_eq!(table.len(), 3);
        assert!(table.contains("firstName"));
        assert!(table.contains("lastName"));
        assert!(table.contains("email"));
        assert!(table.get("phone").is_none());
    }

    #[test]
    fn test_name_rule_bounds() {
        let rule = FieldRuleTable::standard().get("firstName").unwrap();
        assert!(rule.required);
        assert_eq!(rule.min_length, Some(2));
        assert_eq!(rule.max_length, Some(50));
        assert_eq!(
            rule.message_for(ViolationKind::Pattern),
            "First name can only contain letters, spaces, hyphens, and apostrophes"
        );
    }

    #[test]
    fn test_email_rule_has_no_length_bounds() {
        let rule = FieldRuleTable::standard().get("email").unwrap();
        assert!(rule.required);
        assert_eq!(rule.min_length, None);
        assert_eq!(rule.max_length, None);
        assert_eq!(rule.message_for(ViolationKind::Required), "Email is required");
    }

    #[test]
    fn test_name_pattern_character_classes() {
        let rule = FieldRuleTable::standard().get("lastName").unwrap();
        assert!(rule.matches_pattern("Mary-Jane O'Neil"));
        assert!(rule.matches_pattern("van der\tBerg"));
        assert!(!rule.matches_pattern("John123"));
        assert!(!rule.matches_pattern("José"));
        assert!(!rule.matches_pattern(""));
    }

    #[test]
    fn test_standard_rules_build_from_constants() {
        let names = FieldRule::builder()
            .pattern(PERSON_NAME_PATTERN, "names")
            .and_then(FieldRuleBuilder::build);
        let email = FieldRule::builder()
            .pattern(EMAIL_PATTERN, "email")
            .and_then(FieldRuleBuilder::build);
        assert!(names.is_ok());
        assert!(email.is_ok());
        assert_eq!(person_name_rule("Nickname").max_length, Some(50));
        assert!(email_rule().required);
    }

    #[test]
    fn test_whitespace_set() {
        let trimmed = [
            '\t', '\n', '\u{000B}', '\u{000C}', '\r', ' ', '\u{00A0}', '\u{2003}', '\u{3000}',
            '\u{FEFF}',
        ];
        for c in trimmed {
            assert!(is_form_whitespace(c), "{:?}", c);
        }
        for c in ['\u{0085}', '\u{180E}', '\u{200B}', 'a', '-'] {
            assert!(!is_form_whitespace(c), "{:?}", c);
        }
    }

    #[test]
    fn test_pattern_classes_follow_whitespace_set() {
        let name = FieldRuleTable::standard().get("firstName").unwrap();
        assert!(name.matches_pattern("Ann\u{00A0}Lee"));
        assert!(name.matches_pattern("Ann\u{FEFF}Lee"));
        assert!(!name.matches_pattern("Ann\u{0085}Lee"));

        let email = FieldRuleTable::standard().get("email").unwrap();
        assert!(!email.matches_pattern("us\u{3000}er@example.com"));
        assert!(email.matches_pattern("us\u{0085}er@example.com"));
    }

    #[test]
    fn test_email_pattern() {
        let rule = FieldRuleTable::standard().get("email").unwrap();
        assert!(rule.matches_pattern("a@b.c"));
        assert!(rule.matches_pattern("user@mail.example.com"));
        assert!(!rule.matches_pattern("user@domain"));
        assert!(!rule.matches_pattern("user@"));
        assert!(!rule.matches_pattern("us er@example.com"));
        assert!(!rule.matches_pattern("a@@b.c"));
    }

    #[test]
    fn test_missing_message_falls_back() {
        let rule = FieldRule::builder().build().unwrap();
        assert_eq!(rule.message_for(ViolationKind::Required), "This field is required");
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = FieldRule::builder().pattern("[unclosed", "bad");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let result = FieldRule::builder()
            .min_length(10, "short")
            .max_length(5, "long")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_table_serializes_pattern_as_string() {
        let value = serde_json::to_value(FieldRuleTable::standard()).unwrap();
        assert_eq!(value["email"]["pattern"], EMAIL_PATTERN);
        assert_eq!(value["firstName"]["minLength"], 2);
        assert!(value["email"].get("minLength").is_none());
        assert_eq!(value["email"]["messages"]["required"], "Email is required");
    }
}
