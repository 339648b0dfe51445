//! Generate page state: per-mode drafts, submission and share flow.
//!
//! Validation runs in [`GenerateState::prepare_submit`]; a rejected draft
//! records an inline error and yields no request.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use qrwire::image::{PREVIEW_SIZE, image_url};
use qrwire::validate::{validate_content, validate_share_email};
use qrwire::{CreateQrCodeRequest, QrCode, QrCodeType};

use super::toast::Toast;
use crate::net::http::ApiError;

/// Input for one mode. URL and Text drafts are kept apart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    /// Inline validation message.
    pub error: Option<String>,
}

/// The most recent successful generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    pub code: QrCode,
    /// Content as submitted; the image and clipboard use this.
    pub content: String,
    pub image_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateState {
    pub mode: QrCodeType,
    pub url: Draft,
    pub text: Draft,
    pub submitting: bool,
    pub generated: Option<Generated>,
    pub share_email: String,
    pub sharing: bool,
}

impl GenerateState {
    #[must_use]
    pub fn draft(&self) -> &Draft {
        match self.mode {
            QrCodeType::Url => &self.url,
            QrCodeType::Text => &self.text,
        }
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        match self.mode {
            QrCodeType::Url => &mut self.url,
            QrCodeType::Text => &mut self.text,
        }
    }

    pub fn set_mode(&mut self, mode: QrCodeType) {
        self.mode = mode;
    }

    pub fn set_content(&mut self, content: String) {
        let draft = self.draft_mut();
        draft.content = content;
        draft.error = None;
    }

    pub fn set_title(&mut self, title: String) {
        self.draft_mut().title = title;
    }

    /// Validate the active draft and mark the form as submitting.
    ///
    /// Returns `None` when validation fails or a submission is in flight.
    pub fn prepare_submit(&mut self) -> Option<CreateQrCodeRequest> {
        if self.submitting {
            return None;
        }
        let mode = self.mode;
        let draft = self.draft_mut();
        match validate_content(mode, &draft.content) {
            Ok(content) => {
                draft.error = None;
                let request = CreateQrCodeRequest::new(content, mode, Some(&draft.title));
                self.submitting = true;
                Some(request)
            }
            Err(err) => {
                draft.error = Some(err.to_string());
                None
            }
        }
    }

    pub fn apply_generated(&mut self, code: QrCode, content: String) -> Toast {
        self.submitting = false;
        let image_url = image_url(&content, PREVIEW_SIZE);
        self.generated = Some(Generated { code, content, image_url });
        Toast::success("QR Code Generated", "Your QR code has been successfully generated.")
    }

    pub fn apply_generate_error(&mut self, err: &ApiError) -> Toast {
        self.submitting = false;
        leptos::logging::warn!("generate failed: {err}");
        Toast::error("Generation Failed", "Failed to generate QR code. Please try again.")
    }

    /// Id and trimmed recipient of the pending share.
    ///
    /// `None` when nothing was generated, the email is blank, or a share is
    /// already in flight.
    pub fn prepare_share(&mut self) -> Option<(String, String)> {
        if self.sharing {
            return None;
        }
        let id = self.generated.as_ref()?.code.id.clone();
        let email = validate_share_email(&self.share_email).ok()?;
        self.sharing = true;
        Some((id, email))
    }

    pub fn apply_shared(&mut self, email: &str) -> Toast {
        self.sharing = false;
        self.share_email.clear();
        Toast::success("QR Code Shared", format!("Your QR code has been shared to {email}."))
    }

    pub fn apply_share_error(&mut self, err: &ApiError) -> Toast {
        self.sharing = false;
        leptos::logging::warn!("share failed: {err}");
        Toast::error("Sharing Failed", "Failed to share QR code via email. Please try again.")
    }
}

#[must_use]
pub fn downloaded_toast() -> Toast {
    Toast::success("QR Code Downloaded", "Your QR code has been downloaded as an image.")
}

#[must_use]
pub fn copied_toast() -> Toast {
    Toast::success("Copied to Clipboard", "The QR code content has been copied to your clipboard.")
}

#[must_use]
pub fn copy_failed_toast() -> Toast {
    Toast::error("Copy Failed", "Could not access the clipboard.")
}
