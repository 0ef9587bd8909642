//! Reactive state for the early-access signup form
//!
//! `SignupForm` is an explicit record of `RwSignal`s owned by the form
//! component. Field edits and the submission workflow go through named
//! operations here rather than ad hoc signal writes in the view.

use leptos::prelude::*;

use crate::core::{SignupRequest, SubmitError, SubmitStatus, sanitize_phone};

/// Transient form state: the three inputs, the status line, and the
/// submitting flag that gates the submit button.
#[derive(Clone, Copy)]
pub struct SignupForm {
    pub company: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub status: RwSignal<SubmitStatus>,
    pub submitting: RwSignal<bool>,
}

impl SignupForm {
    /// Fresh form with empty fields, as on page load.
    pub fn new() -> Self {
        Self {
            company: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            status: RwSignal::new(SubmitStatus::Idle),
            submitting: RwSignal::new(false),
        }
    }

    /// Store a phone edit, silently dropping any non-digit characters.
    pub fn set_phone(&self, raw: &str) {
        self.phone.set(sanitize_phone(raw));
    }

    /// Validate and start a submission attempt.
    ///
    /// Returns the request to send, or `None` when validation failed or a
    /// request is already outstanding. Submissions are serialized: the
    /// button is disabled while the flag is set, and a second call made
    /// anyway is a no-op.
    ///
    /// The flag is never set on the validation failure path, and no
    /// request is produced.
    pub fn begin_submit(&self) -> Option<SignupRequest> {
        if self.submitting.get_untracked() {
            return None;
        }

        let email = self.email.get_untracked();
        if email.trim().is_empty() {
            self.status
                .set(SubmitStatus::Failed(SubmitError::MissingEmail));
            return None;
        }

        self.submitting.set(true);
        self.status.set(SubmitStatus::Submitting);

        Some(SignupRequest {
            company: self.company.get_untracked(),
            email,
            phone: self.phone.get_untracked(),
        })
    }

    /// Record the outcome of a submission attempt.
    ///
    /// A confirmed success clears the inputs; any failure leaves them
    /// untouched so the visitor can retry. The submitting flag is cleared
    /// last, unconditionally.
    pub fn apply_outcome(&self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                self.company.set(String::new());
                self.email.set(String::new());
                self.phone.set(String::new());
                self.status.set(SubmitStatus::Accepted);
            }
            Err(err) => {
                self.status.set(SubmitStatus::Failed(err));
            }
        }
        self.submitting.set(false);
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one submission attempt: validate, POST to the hosted endpoint, and
/// reflect the outcome in the form state. Exactly one network call per
/// successful validation pass; no retries, no timeout.
#[cfg(not(feature = "ssr"))]
pub async fn submit(form: SignupForm) {
    use gloo_net::http::Request;

    use crate::core::{FORM_ENDPOINT, outcome_for_status};

    let Some(request) = form.begin_submit() else {
        return;
    };

    let outcome = match Request::post(FORM_ENDPOINT)
        .header("Content-Type", "application/json")
        .json(&request)
    {
        Ok(req) => match req.send().await {
            Ok(response) => outcome_for_status(response.status()),
            Err(_) => Err(SubmitError::Unreachable),
        },
        Err(_) => Err(SubmitError::Unreachable),
    };

    form.apply_outcome(outcome);
}

/// The submit handler only runs in the browser; server-side rendering
/// never triggers it.
#[cfg(feature = "ssr")]
pub async fn submit(_form: SignupForm) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.set();
        f()
    }

    #[test]
    fn test_blank_email_aborts_without_network_state() {
        with_owner(|| {
            let form = SignupForm::new();
            form.email.set("   ".to_string());

            assert!(form.begin_submit().is_none());
            assert_eq!(
                form.status.get_untracked(),
                SubmitStatus::Failed(SubmitError::MissingEmail)
            );
            assert!(!form.submitting.get_untracked());
        });
    }

    #[test]
    fn test_begin_submit_carries_raw_fields() {
        with_owner(|| {
            let form = SignupForm::new();
            form.company.set("Acme".to_string());
            form.email.set(" ops@acme.test ".to_string());
            form.set_phone("(555) 010-9999");

            let request = form.begin_submit().expect("validation should pass");

            // email is sent as typed; only the emptiness check trims
            assert_eq!(request.email, " ops@acme.test ");
            assert_eq!(request.company, "Acme");
            assert_eq!(request.phone, "5550109999");
            assert!(form.submitting.get_untracked());
            assert_eq!(form.status.get_untracked(), SubmitStatus::Submitting);
        });
    }

    #[test]
    fn test_second_submit_while_outstanding_is_a_noop() {
        with_owner(|| {
            let form = SignupForm::new();
            form.email.set("ops@acme.test".to_string());

            assert!(form.begin_submit().is_some());
            assert!(form.begin_submit().is_none());
            assert_eq!(form.status.get_untracked(), SubmitStatus::Submitting);
        });
    }

    #[test]
    fn test_accepted_outcome_clears_fields() {
        with_owner(|| {
            let form = SignupForm::new();
            form.company.set("Acme".to_string());
            form.email.set("ops@acme.test".to_string());
            form.set_phone("5550109999");
            form.begin_submit().expect("validation should pass");

            form.apply_outcome(Ok(()));

            assert_eq!(form.company.get_untracked(), "");
            assert_eq!(form.email.get_untracked(), "");
            assert_eq!(form.phone.get_untracked(), "");
            assert_eq!(form.status.get_untracked(), SubmitStatus::Accepted);
            assert!(!form.submitting.get_untracked());
        });
    }

    #[test]
    fn test_rejected_outcome_retains_fields() {
        with_owner(|| {
            let form = SignupForm::new();
            form.company.set("Acme".to_string());
            form.email.set("ops@acme.test".to_string());
            form.set_phone("5550109999");
            form.begin_submit().expect("validation should pass");

            form.apply_outcome(Err(SubmitError::Rejected));

            assert_eq!(form.company.get_untracked(), "Acme");
            assert_eq!(form.email.get_untracked(), "ops@acme.test");
            assert_eq!(form.phone.get_untracked(), "5550109999");
            assert_eq!(
                form.status.get_untracked(),
                SubmitStatus::Failed(SubmitError::Rejected)
            );
            assert!(!form.submitting.get_untracked());
        });
    }

    #[test]
    fn test_unreachable_outcome_retains_fields() {
        with_owner(|| {
            let form = SignupForm::new();
            form.email.set("ops@acme.test".to_string());
            form.begin_submit().expect("validation should pass");

            form.apply_outcome(Err(SubmitError::Unreachable));

            assert_eq!(form.email.get_untracked(), "ops@acme.test");
            assert_eq!(
                form.status.get_untracked(),
                SubmitStatus::Failed(SubmitError::Unreachable)
            );
            assert!(!form.submitting.get_untracked());
        });
    }

    #[test]
    fn test_phone_input_is_digits_only() {
        with_owner(|| {
            let form = SignupForm::new();

            form.set_phone("a1b2c3");
            assert_eq!(form.phone.get_untracked(), "123");

            form.set_phone("");
            assert_eq!(form.phone.get_untracked(), "");
        });
    }

    #[test]
    fn test_resubmit_after_failure_is_allowed() {
        with_owner(|| {
            let form = SignupForm::new();
            form.email.set("ops@acme.test".to_string());

            form.begin_submit().expect("first attempt");
            form.apply_outcome(Err(SubmitError::Unreachable));

            // the flag was cleared, so the control is usable again
            assert!(form.begin_submit().is_some());
        });
    }
}
