//! Shared utilities for command handlers

use crate::config::is_yaml;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use waitlist_core::FormData;

/// Load a form file (a JSON or YAML object of field names to values)
pub fn load_form(path: &Path) -> Result<FormData> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    let value: serde_json::Value = if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        })?
    };

    FormData::from_json(&value).map_err(|_| Error::InvalidFormat {
        path: path.to_path_buf(),
        expected: "an object of field names to values".to_string(),
    })
}
