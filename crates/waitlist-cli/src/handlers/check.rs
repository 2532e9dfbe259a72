//! Check command handler

use super::page::RecordedDisplay;
use super::utils::load_form;
use crate::cli::CheckArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use waitlist_core::{validate_form, Validator};

/// Handle the check command
pub async fn handle_check(args: CheckArgs, output: &mut OutputWriter) -> Result<()> {
    output.info(&format!("Checking form: {}", args.form.display()))?;

    let form = load_form(&args.form)?;
    let mut display = RecordedDisplay::default();
    let all_valid = validate_form(&Validator::standard(), &form, &mut display);

    output.section("Fields")?;
    output.verdicts(display.verdicts())?;

    if all_valid {
        output.success("All fields are valid")?;
        Ok(())
    } else {
        Err(Error::ValidationFailed {
            fields: display.failed_fields(),
        })
    }
}
