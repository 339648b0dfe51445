//! Client-side validation of QR code input, run before any request is sent.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::model::QrCodeType;

/// Input rejected before submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid URL")]
    InvalidUrl,
    #[error("Please enter some text")]
    EmptyText,
    #[error("Please enter a valid date: {0}")]
    InvalidDate(String),
    #[error("Please enter an email address")]
    EmptyEmail,
}

/// Validate `content` for the given mode and return the value to submit.
///
/// URL mode requires an absolute URL (scheme included) and submits it trimmed.
/// Text mode requires at least one non-whitespace character and submits the
/// text as typed.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidUrl`] or [`ValidationError::EmptyText`].
pub fn validate_content(kind: QrCodeType, content: &str) -> Result<String, ValidationError> {
    match kind {
        QrCodeType::Url => {
            let trimmed = content.trim();
            if trimmed.is_empty() || url::Url::parse(trimmed).is_err() {
                return Err(ValidationError::InvalidUrl);
            }
            Ok(trimmed.to_owned())
        }
        QrCodeType::Text => {
            if content.trim().is_empty() {
                return Err(ValidationError::EmptyText);
            }
            Ok(content.to_owned())
        }
    }
}

/// Validate a share recipient. Only presence is checked; the backend owns
/// address validation.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyEmail`] for blank input.
pub fn validate_share_email(email: &str) -> Result<String, ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    Ok(trimmed.to_owned())
}
