//! Form controller and its collaborators
//!
//! - `data`: raw form entries and the trimmed submission payload
//! - `collaborators`: traits standing in for the page and the backend
//! - `controller`: blur/input/submit handling

pub mod collaborators;
pub mod controller;
pub mod data;

pub use collaborators::{
    Analytics, AnalyticsEvent, ErrorDisplay, LogAnalytics, Navigator, SubmitButton, SubmitControl,
    Submitter,
};
pub use controller::{
    validate_form, ControllerSettings, FormController, SubmitOutcome, DEFAULT_REDIRECT,
    SUBMISSION_FAILURE_MESSAGE, SUBMITTING_LABEL,
};
pub use data::{FormData, Submission, SubmissionReceipt};
