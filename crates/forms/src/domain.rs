use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current user-entered values for one mounted form, keyed by the wire
/// field name (`username`, `passwordConfirm`, ...). Reset only on remount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for `field`; an absent field reads as empty.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A validation failure attributed to a specific field. Produced by schema
/// evaluation or carried back from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Normalized outcome of one remote submission attempt. Exactly one variant
/// per attempt; the dispatcher relies on this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionResult {
    Success { redirect_target: Option<String> },
    FieldErrors(Vec<FieldError>),
    GlobalError { message: String },
}

/// Submission flags owned by the controller for the form's mounted lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub is_submitting: bool,
    pub has_been_submitted: bool,
    pub is_valid: bool,
    pub global_error: Option<String>,
}
