//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), including field
//! verdicts, form reports, the rule table, and progress indicators.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;
use waitlist_core::{FieldRuleTable, ValidationResult, ViolationKind};

/// Verdict for one field, as reported by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldVerdict {
    pub field: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format verdicts for one or more fields
    fn format_verdicts(&self, verdicts: &[FieldVerdict]) -> Result<String>;

    /// Format the rule table
    fn format_rules(&self, rules: &FieldRuleTable) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_verdicts(&self, verdicts: &[FieldVerdict]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_verdicts_human(verdicts)),
            _ if verdicts.len() == 1 => self.format(&verdicts[0]),
            _ => self.format(&verdicts),
        }
    }

    fn format_rules(&self, rules: &FieldRuleTable) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_rules_human(rules)),
            _ => self.format(rules),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, progress: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: progress && !quiet && io::stdout().is_terminal(),
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[cfg(test)]
    pub fn with_writer(format: OutputFormat, writer: Box<dyn Write>) -> Self {
        Self {
            format,
            use_color: false,
            show_progress: false, // No progress bars with custom writers
            quiet: false,
            writer,
        }
    }

    /// Whether machine-readable output was requested
    pub fn is_machine(&self) -> bool {
        self.format != OutputFormat::Human
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.is_machine() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.is_machine() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.is_machine() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.is_machine() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.is_machine() {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        self.writeln(formatted.trim_end())
    }

    /// Write field verdicts
    pub fn verdicts(&mut self, verdicts: &[FieldVerdict]) -> Result<()> {
        let formatted = self.format.format_verdicts(verdicts)?;
        if self.use_color && !self.is_machine() {
            let colored = formatted
                .lines()
                .map(|line| {
                    if line.starts_with('✓') {
                        line.green().to_string()
                    } else if line.starts_with('✗') {
                        line.red().to_string()
                    } else {
                        line.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            self.writeln(&colored)
        } else {
            self.writeln(formatted.trim_end())
        }
    }

    /// Write the rule table
    pub fn rules(&mut self, rules: &FieldRuleTable) -> Result<()> {
        let formatted = self.format.format_rules(rules)?;
        self.writeln(formatted.trim_end())
    }

    /// Create a spinner for indeterminate progress
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(default_spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}

/// Helper function to create a spinner style
pub fn default_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Format verdicts for human reading, one line per field
fn format_verdicts_human(verdicts: &[FieldVerdict]) -> String {
    let width = verdicts.iter().map(|v| v.field.len()).max().unwrap_or(0);

    verdicts
        .iter()
        .map(|verdict| {
            if verdict.result.valid {
                format!("✓ {:width$}  valid", verdict.field, width = width)
            } else {
                format!(
                    "✗ {:width$}  {}",
                    verdict.field,
                    verdict.result.message,
                    width = width
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the rule table for human reading
fn format_rules_human(rules: &FieldRuleTable) -> String {
    let mut output = String::new();

    for (name, rule) in rules.iter() {
        output.push_str(&format!("{}\n", name));
        output.push_str(&format!("  required:   {}\n", if rule.required { "yes" } else { "no" }));
        if let Some(min) = rule.min_length {
            output.push_str(&format!("  min length: {}\n", min));
        }
        if let Some(max) = rule.max_length {
            output.push_str(&format!("  max length: {}\n", max));
        }
        if let Some(pattern) = &rule.pattern {
            output.push_str(&format!("  pattern:    {}\n", pattern.as_str()));
        }
        for kind in ViolationKind::ALL {
            if let Some(message) = rule.messages.get(&kind) {
                output.push_str(&format!("  {:<10}  \"{}\"\n", kind.to_string(), message));
            }
        }
        output.push('\n');
    }

    output
}
