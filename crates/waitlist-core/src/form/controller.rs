//! Form controller
//!
//! Wires the validator to field events (blur, input, submit) and drives one
//! submission at a time through the submission collaborator.

use super::{
    Analytics, AnalyticsEvent, ErrorDisplay, FormData, Navigator, SubmissionReceipt,
    SubmitControl, Submitter,
};
use crate::validation::Validator;
use crate::{Error, Result};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Label shown on the submit control while a submission is in flight
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Page the user is sent to after a successful signup
pub const DEFAULT_REDIRECT: &str = "thank-you.html";

/// Single user-facing message for any submission failure
pub const SUBMISSION_FAILURE_MESSAGE: &str =
    "Sorry, there was an error submitting your information. Please try again.";

/// Tunables for the submit flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    pub redirect_target: String,
    pub submitting_label: String,
    pub failure_message: String,
    /// Upper bound on the submission call; unbounded when `None`
    pub timeout: Option<Duration>,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            redirect_target: DEFAULT_REDIRECT.to_string(),
            submitting_label: SUBMITTING_LABEL.to_string(),
            failure_message: SUBMISSION_FAILURE_MESSAGE.to_string(),
            timeout: None,
        }
    }
}

/// How a submit event ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted by the backend; the user has been redirected
    Submitted(SubmissionReceipt),
    /// At least one field failed validation; nothing was sent
    Invalid,
    /// The backend failed; the control has been re-enabled
    Failed { reason: String },
    /// A submission was already in flight
    Busy,
}

/// Validate every entry, showing or clearing each field's error
///
/// Returns true when all fields pass.
pub fn validate_form(
    validator: &Validator<'_>,
    form: &FormData,
    display: &mut dyn ErrorDisplay,
) -> bool {
    let mut is_valid = true;

    for (field_name, value) in form.entries() {
        let verdict = validator.validate(field_name, value);
        if verdict.valid {
            display.clear_error(field_name);
        } else {
            display.show_error(field_name, &verdict.message);
            is_valid = false;
        }
    }

    is_valid
}

/// Binds validation and submission to a form's collaborators
pub struct FormController<'a, D, C, N> {
    validator: Validator<'a>,
    display: D,
    control: C,
    navigator: N,
    submitter: Box<dyn Submitter>,
    analytics: Option<Box<dyn Analytics>>,
    settings: ControllerSettings,
}

impl<D, C, N> FormController<'static, D, C, N>
where
    D: ErrorDisplay,
    C: SubmitControl,
    N: Navigator,
{
    /// Controller over the standard waitlist rules
    pub fn new(display: D, control: C, navigator: N, submitter: Box<dyn Submitter>) -> Self {
        Self {
            validator: Validator::standard(),
            display,
            control,
            navigator,
            submitter,
            analytics: None,
            settings: ControllerSettings::default(),
        }
    }
}

impl<'a, D, C, N> FormController<'a, D, C, N>
where
    D: ErrorDisplay,
    C: SubmitControl,
    N: Navigator,
{
    pub fn with_validator<'b>(self, validator: Validator<'b>) -> FormController<'b, D, C, N> {
        FormController {
            validator,
            display: self.display,
            control: self.control,
            navigator: self.navigator,
            submitter: self.submitter,
            analytics: self.analytics,
            settings: self.settings,
        }
    }

    pub fn with_analytics(mut self, analytics: Box<dyn Analytics>) -> Self {
        self.analytics = Some(analytics);
        self
    }

    pub fn with_settings(mut self, settings: ControllerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Field lost focus: validate it and show or clear its error
    pub fn on_blur(&mut self, field_name: &str, value: Option<&str>) -> bool {
        let verdict = self.validator.validate(field_name, value);
        if verdict.valid {
            self.display.clear_error(field_name);
        } else {
            self.display.show_error(field_name, &verdict.message);
        }
        verdict.valid
    }

    /// Field is being edited: drop any stale error
    pub fn on_input(&mut self, field_name: &str) {
        self.display.clear_error(field_name);
    }

    /// Validate the whole form without submitting it
    pub fn validate_form(&mut self, form: &FormData) -> bool {
        validate_form(&self.validator, form, &mut self.display)
    }

    /// Handle a submit event
    #[instrument(skip_all, fields(fields = form.len()))]
    pub async fn on_submit(&mut self, form: &FormData) -> SubmitOutcome {
        if self.control.is_disabled() {
            debug!("Submit ignored while a submission is in flight");
            return SubmitOutcome::Busy;
        }

        if !validate_form(&self.validator, form, &mut self.display) {
            info!("Form rejected by validation");
            return SubmitOutcome::Invalid;
        }

        let original_label = self.control.label();
        self.control.set_disabled(true);
        self.control.set_label(&self.settings.submitting_label);

        let submission = form.to_submission();
        debug!(fields = submission.len(), "Submitting form");

        match self.send(&submission).await {
            Ok(receipt) => {
                if let Some(analytics) = &self.analytics {
                    analytics.track(&AnalyticsEvent::form_submission());
                }
                info!(target_page = %self.settings.redirect_target, "Form submitted");
                self.navigator.redirect(&self.settings.redirect_target);
                SubmitOutcome::Submitted(receipt)
            }
            Err(e) => {
                error!(error = %e, "Form submission error");
                self.display.alert(&self.settings.failure_message);
                self.control.set_disabled(false);
                self.control.set_label(&original_label);
                SubmitOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn send(&self, submission: &super::Submission) -> Result<SubmissionReceipt> {
        match self.settings.timeout {
            Some(limit) => tokio::time::timeout(limit, self.submitter.submit(submission))
                .await
                .unwrap_or_else(|_| {
                    warn!(timeout_ms = limit.as_millis() as u64, "Submission timed out");
                    Err(Error::Timeout {
                        timeout_ms: limit.as_millis() as u64,
                    })
                }),
            None => self.submitter.submit(submission).await,
        }
    }
}
