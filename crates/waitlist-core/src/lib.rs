//! Waitlist Core - Field validation and submission flow for the waitlist signup form
//!
//! This crate validates the signup form's fields against a static rule table
//! and drives the submit flow against pluggable page and backend collaborators.
//!
//! # Main Components
//!
//! - **Validation**: the rule table and the validator that returns one verdict per field
//! - **Form Controller**: blur/input/submit handling over narrow collaborator traits
//! - **Submission Backends**: simulated and HTTP implementations of [`Submitter`]
//! - **Error Handling**: submission-side error types using `thiserror` and `anyhow`
//!
//! # Example
//!
//! ```
//! use waitlist_core::validate_field;
//!
//! let verdict = validate_field("email", Some("user+tag@example.com"));
//! assert!(verdict.valid);
//!
//! let verdict = validate_field("firstName", Some("A"));
//! assert_eq!(verdict.message, "First name must be at least 2 characters");
//! ```

pub mod error;
pub mod form;
pub mod submit;
pub mod validation;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use form::{
    validate_form, Analytics, AnalyticsEvent, ControllerSettings, ErrorDisplay, FormController,
    FormData, LogAnalytics, Navigator, Submission, SubmissionReceipt, SubmitButton, SubmitControl,
    SubmitOutcome, Submitter,
};
pub use submit::{HttpBackend, SimulatedBackend};
pub use validation::{
    is_form_whitespace, validate_field, FieldRule, FieldRuleTable, ValidationResult, Validator,
    ViolationKind,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
