//! Validate command handler

use crate::cli::ValidateArgs;
use crate::error::{Error, Result};
use crate::output::{FieldVerdict, OutputWriter};
use waitlist_core::Validator;

/// Handle the validate command
pub async fn handle_validate(args: ValidateArgs, output: &mut OutputWriter) -> Result<()> {
    let validator = Validator::standard();

    if !validator.rules().contains(&args.field) {
        output.warning(&format!(
            "No rule for field '{}'; any value is accepted",
            args.field
        ))?;
    }

    let result = validator.validate(&args.field, args.value.as_deref());
    tracing::debug!(field = %args.field, valid = result.valid, "Validated field");

    let failed = !result.valid;
    output.verdicts(&[FieldVerdict {
        field: args.field.clone(),
        result,
    }])?;

    if failed {
        return Err(Error::ValidationFailed {
            fields: vec![args.field],
        });
    }

    Ok(())
}
