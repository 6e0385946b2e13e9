use thiserror::Error;
use validator::ValidateLength;

use crate::models::{OnboardingData, ProfileDetails};

/// Longest accepted display name, in characters
pub const MAX_NAME_LEN: u64 = 80;
/// Longest accepted role or goal
pub const MAX_TEXT_LEN: u64 = 200;
/// Longest accepted experience level or learning path
pub const MAX_LABEL_LEN: u64 = 100;

/// Rejected profile input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    /// Name of the rejected field
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a display name: 1 to 80 characters once trimmed
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("name", "cannot be empty"));
    }
    if !trimmed.validate_length(None, Some(MAX_NAME_LEN), None) {
        return Err(ValidationError::new(
            "name",
            format!("must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(())
}

/// Validate optional free text such as role or goal
pub fn validate_free_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !value.validate_length(None, Some(MAX_TEXT_LEN), None) {
        return Err(ValidationError::new(
            field,
            format!("must be at most {MAX_TEXT_LEN} characters"),
        ));
    }
    Ok(())
}

/// Validate a selection label such as experience level or learning path
pub fn validate_label(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !value
        .trim()
        .validate_length(Some(1), Some(MAX_LABEL_LEN), None)
    {
        return Err(ValidationError::new(
            field,
            format!("must be between 1 and {MAX_LABEL_LEN} characters"),
        ));
    }
    Ok(())
}

/// Validate the name, role and goal written by a profile save
pub fn validate_details(details: &ProfileDetails) -> Result<(), ValidationError> {
    validate_name(&details.name)?;
    validate_free_text("role", &details.role)?;
    validate_free_text("goal", &details.goal)
}

/// Validate the fields written by onboarding
pub fn validate_onboarding(data: &OnboardingData) -> Result<(), ValidationError> {
    validate_name(&data.name)?;
    validate_label("experience_level", &data.experience_level)?;
    validate_label("learning_path", &data.learning_path)?;
    validate_free_text("goal", &data.goal)
}
