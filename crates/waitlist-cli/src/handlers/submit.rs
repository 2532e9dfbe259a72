//! Submit command handler

use super::page::{RecordedDisplay, RecordedNavigator};
use super::utils::load_form;
use crate::cli::SubmitArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::{redaction, timing::Timer};
use crate::output::OutputWriter;
use serde::Serialize;
use std::time::Duration;
use waitlist_core::{
    FormController, HttpBackend, LogAnalytics, SimulatedBackend, SubmissionReceipt, SubmitButton,
    SubmitOutcome, Submitter,
};

/// Result of an accepted submission, as reported to the user
#[derive(Debug, Serialize)]
struct SubmitReport<'a> {
    status: &'static str,
    backend: &'a str,
    redirect: &'a str,
    #[serde(flatten)]
    receipt: &'a SubmissionReceipt,
}

/// Handle the submit command
pub async fn handle_submit(
    args: SubmitArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let timer = Timer::with_details("submit", &args.form.display().to_string());
    output.info(&format!("Submitting form: {}", args.form.display()))?;

    let form = load_form(&args.form)?;

    let (submitter, backend) = build_submitter(&args, config)?;
    let mut settings = config.submission.controller_settings();
    if let Some(secs) = args.timeout_secs {
        settings.timeout = Some(Duration::from_secs(secs));
    }

    let mut controller = FormController::new(
        RecordedDisplay::default(),
        SubmitButton::default(),
        RecordedNavigator::default(),
        submitter,
    )
    .with_settings(settings);

    if config.submission.analytics && !args.no_analytics {
        controller = controller.with_analytics(Box::new(LogAnalytics));
    }

    tracing::debug!(
        submission = %redaction::redacted_submission(&form.to_submission()),
        backend = %backend,
        "Prepared submission"
    );

    let spinner = output.spinner(&controller.settings().submitting_label);
    let outcome = controller.on_submit(&form).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    tracing::debug!(
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Submit flow finished"
    );

    match outcome {
        SubmitOutcome::Submitted(receipt) => {
            let redirect = controller
                .navigator()
                .target()
                .unwrap_or(controller.settings().redirect_target.as_str());

            if output.is_machine() {
                output.data(&SubmitReport {
                    status: "submitted",
                    backend: &backend,
                    redirect,
                    receipt: &receipt,
                })?;
            } else {
                output.success("Thanks for joining the waitlist!")?;
                if let Some(reference) = &receipt.reference {
                    output.info(&format!("Reference: {}", reference))?;
                }
                output.info(&format!("Redirecting to {}", redirect))?;
            }
            Ok(())
        }
        SubmitOutcome::Invalid => {
            let display = controller.display();
            output.section("Fields")?;
            output.verdicts(display.verdicts())?;
            Err(Error::ValidationFailed {
                fields: display.failed_fields(),
            })
        }
        SubmitOutcome::Failed { reason } => {
            for alert in controller.display().alerts() {
                output.error(alert)?;
            }
            Err(Error::SubmissionFailed(reason))
        }
        SubmitOutcome::Busy => Err(Error::other("A submission is already in progress")),
    }
}

/// Pick the backend from the arguments, falling back to the configuration
fn build_submitter(args: &SubmitArgs, config: &Config) -> Result<(Box<dyn Submitter>, String)> {
    let endpoint = args
        .endpoint
        .as_deref()
        .or(config.submission.endpoint.as_deref());

    match endpoint {
        Some(url) => {
            let backend = HttpBackend::new(url)?;
            let label = backend.endpoint().to_string();
            let submitter: Box<dyn Submitter> = Box::new(backend);
            Ok((submitter, label))
        }
        None => {
            let delay = Duration::from_millis(args.delay_ms.unwrap_or(config.submission.delay_ms));
            let mut backend = SimulatedBackend::new(delay);
            if args.fail {
                backend = backend.failing();
            }
            let submitter: Box<dyn Submitter> = Box::new(backend);
            Ok((submitter, "simulated".to_string()))
        }
    }
}
