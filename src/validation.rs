//! Shape checks for user-entered version values.
//!
//! Input is validated before anything touches the build files, so a
//! rejected value never reaches the writer.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Why a prompted value was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a value is required")]
    Empty,

    #[error("'{0}' must follow the semantic pattern x.y.z")]
    NotSemantic(String),

    #[error("'{0}' must be a non-negative integer")]
    NotInteger(String),
}

// `[0-9]` rather than `\d`, which would also accept non-ASCII digits
static SEMANTIC_VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("hardcoded regex must compile")
});

/// Validates a marketing version (Android `versionName`, iOS `MARKETING_VERSION`).
///
/// Surrounding whitespace is trimmed; the remainder must be exactly three
/// dot-separated groups of ASCII digits.
///
/// # Returns
/// * `Ok(String)` - The trimmed value
/// * `Err(ValidationError)` - If empty or not in x.y.z form
///
/// # Examples
///
/// ```
/// use bump_version::validation::validate_marketing_version;
/// assert!(validate_marketing_version("1.2.3").is_ok());
/// assert!(validate_marketing_version("1.2").is_err());
/// ```
pub fn validate_marketing_version(input: &str) -> Result<String, ValidationError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty);
    }

    if SEMANTIC_VERSION_PATTERN.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::NotSemantic(value.to_string()))
    }
}

/// Validates a build version (Android `versionCode`, iOS `CURRENT_PROJECT_VERSION`).
///
/// Accepts only ASCII digits, so signs, decimals and words are all rejected.
/// The value is kept as text; leading zeros are preserved.
pub fn validate_build_version(input: &str) -> Result<String, ValidationError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty);
    }

    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::NotInteger(value.to_string()))
    }
}
