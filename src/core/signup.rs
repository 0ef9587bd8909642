//! Early-access signup domain logic
//!
//! The form posts a fixed-shape JSON body to a hosted Formspree endpoint.
//! Everything with an observable contract lives here: the request shape,
//! the status/error taxonomy, and the phone sanitization rule. The reactive
//! wiring around it is in `crate::ui::signup`.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Hosted form-processing endpoint. Changing the destination is a code
/// change, not a configuration option.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xkovzeev";

/// JSON body of the signup POST. Exactly three keys, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    /// Company name, free text, may be empty
    pub company: String,
    /// Work email as typed (validation only trims for the emptiness check)
    pub email: String,
    /// Phone number, digits only, may be empty
    pub phone: String,
}

/// The three ways a submission attempt can fail.
///
/// The `Display` strings are the user-visible status text and are shown
/// verbatim. Response bodies are never inspected, so `Rejected` carries no
/// further detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Required field missing; detected before any I/O
    #[error("Work email is required")]
    MissingEmail,
    /// The endpoint answered with a non-2xx status
    #[error("Something went wrong. Try again.")]
    Rejected,
    /// The request never completed (connectivity loss, DNS failure, ...)
    #[error("Network error. Please try again.")]
    Unreachable,
}

/// Submission lifecycle state. The variant is the source of truth; the
/// status line derives its text from `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    /// Nothing attempted yet, or the page was just loaded
    #[default]
    Idle,
    /// A request is outstanding
    Submitting,
    /// The endpoint accepted the submission
    Accepted,
    /// The attempt failed; see the error for which bucket
    Failed(SubmitError),
}

impl fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitStatus::Idle => Ok(()),
            SubmitStatus::Submitting => write!(f, "Submitting..."),
            SubmitStatus::Accepted => write!(f, "You're on the early access list"),
            SubmitStatus::Failed(err) => write!(f, "{err}"),
        }
    }
}

impl SubmitStatus {
    /// Whether the status line currently has something to show
    pub fn is_visible(self) -> bool {
        self != SubmitStatus::Idle
    }
}

/// Keep ASCII digits only. Applied on every keystroke of the phone input,
/// so the stored value never contains a non-digit.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Map an HTTP status code to a submission outcome. Any 2xx counts as
/// accepted; everything else is an opaque rejection.
pub fn outcome_for_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected)
    }
}
