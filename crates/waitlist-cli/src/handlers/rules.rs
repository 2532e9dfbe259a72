//! Rules command handler

use crate::error::Result;
use crate::output::OutputWriter;
use waitlist_core::FieldRuleTable;

/// Handle the rules command
pub async fn handle_rules(output: &mut OutputWriter) -> Result<()> {
    output.section("Field rules")?;
    output.rules(FieldRuleTable::standard())
}
