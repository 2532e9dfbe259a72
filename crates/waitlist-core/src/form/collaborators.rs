//! Narrow interfaces to the host environment
//!
//! The form controller never touches markup or the network directly. It
//! reports verdicts through [`ErrorDisplay`], drives the submit control
//! through [`SubmitControl`], hands data to a [`Submitter`], optionally pings
//! [`Analytics`], and leaves the page through a [`Navigator`].

use super::{Submission, SubmissionReceipt};
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Renders and clears per-field error messages
pub trait ErrorDisplay {
    fn show_error(&mut self, field_name: &str, message: &str);

    fn clear_error(&mut self, field_name: &str);

    /// Form-level message, used for the generic submission failure
    fn alert(&mut self, message: &str);
}

/// The form's submit button
pub trait SubmitControl {
    fn is_disabled(&self) -> bool;

    fn set_disabled(&mut self, disabled: bool);

    fn label(&self) -> String;

    fn set_label(&mut self, label: &str);
}

/// Accepts a validated submission
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<SubmissionReceipt>;
}

/// Receives an event after a successful submission
pub trait Analytics: Send + Sync {
    fn track(&self, event: &AnalyticsEvent);
}

/// Moves the user on once the form has been accepted
pub trait Navigator {
    fn redirect(&mut self, target: &str);
}

/// Analytics payload sent for a completed signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub category: String,
    pub label: String,
    pub value: u32,
}

impl AnalyticsEvent {
    pub fn form_submission() -> Self {
        Self {
            name: "form_submission".to_string(),
            category: "waitlist".to_string(),
            label: "waitlist_signup".to_string(),
            value: 1,
        }
    }
}

/// Plain submit button state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: String,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            disabled: false,
            label: label.into(),
        }
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::new("Join the waitlist")
    }
}

impl SubmitControl for SubmitButton {
    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }
}

/// Analytics sink that records events as structured log lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnalytics;

impl Analytics for LogAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        info!(
            event = %event.name,
            category = %event.category,
            label = %event.label,
            value = event.value,
            "Analytics event"
        );
    }
}
