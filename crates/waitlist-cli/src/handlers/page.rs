//! Terminal stand-ins for the signup page
//!
//! The form controller reports through these; handlers render what they
//! recorded once the controller is done.

use crate::output::FieldVerdict;
use waitlist_core::{ErrorDisplay, Navigator, ValidationResult};

/// Records each field's verdict in the order the controller reports them
#[derive(Debug, Default)]
pub struct RecordedDisplay {
    verdicts: Vec<FieldVerdict>,
    alerts: Vec<String>,
}

impl RecordedDisplay {
    pub fn verdicts(&self) -> &[FieldVerdict] {
        &self.verdicts
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Names of the fields currently showing an error
    pub fn failed_fields(&self) -> Vec<String> {
        self.verdicts
            .iter()
            .filter(|v| !v.result.valid)
            .map(|v| v.field.clone())
            .collect()
    }

    fn record(&mut self, field_name: &str, result: ValidationResult) {
        match self.verdicts.iter_mut().find(|v| v.field == field_name) {
            Some(existing) => existing.result = result,
            None => self.verdicts.push(FieldVerdict {
                field: field_name.to_string(),
                result,
            }),
        }
    }
}

impl ErrorDisplay for RecordedDisplay {
    fn show_error(&mut self, field_name: &str, message: &str) {
        self.record(field_name, ValidationResult::fail(message));
    }

    fn clear_error(&mut self, field_name: &str) {
        self.record(field_name, ValidationResult::pass());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// Remembers where the controller sent the user
#[derive(Debug, Default)]
pub struct RecordedNavigator {
    target: Option<String>,
}

impl RecordedNavigator {
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl Navigator for RecordedNavigator {
    fn redirect(&mut self, target: &str) {
        tracing::debug!(target_page = target, "Redirect requested");
        self.target = Some(target.to_string());
    }
}
