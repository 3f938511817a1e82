use std::collections::HashMap;
use std::future::Future;

use tracing::debug;

use crate::domain::{FormValues, SubmissionResult, SubmissionState};
use crate::schema::ValidationSchema;

/// Outcome of one submit call, before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened.
    InFlight,
    /// Client-side validation failed; the remote action was not invoked.
    Invalid,
    /// The remote action ran and produced a result awaiting dispatch.
    Completed(SubmissionResult),
}

/// Owns one form's values, per-field errors and submission flags for the
/// lifetime of the mounted form. One instance per form; nothing is shared
/// across forms.
pub struct FormController {
    schema: ValidationSchema,
    values: FormValues,
    field_errors: HashMap<String, String>,
    state: SubmissionState,
}

impl FormController {
    /// Mount a form over `schema`, seeding every field with an empty value.
    pub fn new(schema: ValidationSchema) -> Self {
        let mut values = FormValues::new();
        for name in schema.field_names() {
            values.set(name, "");
        }
        Self {
            schema,
            values,
            field_errors: HashMap::new(),
            state: SubmissionState::default(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field)
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.schema.has_field(field)
    }

    /// Update one field. Clears any error previously attached to it, from
    /// either client validation or the backend, so stale feedback never
    /// survives an edit. Values for unknown fields are ignored.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        if !self.schema.has_field(field) {
            debug!(field, "ignoring value for unknown field");
            return;
        }
        self.values.set(field, value);
        self.field_errors.remove(field);
        if self.state.has_been_submitted {
            // Track validity across edits so the submit guard reopens once
            // the user has fixed the form.
            self.state.is_valid = self.schema.validate(&self.values).is_empty();
        }
    }

    /// Attach a backend-reported error to a field.
    pub fn set_field_error(&mut self, field: &str, message: impl Into<String>) {
        self.field_errors.insert(field.into(), message.into());
    }

    pub fn set_global_error(&mut self, message: impl Into<String>) {
        self.state.global_error = Some(message.into());
    }

    pub fn clear_errors(&mut self) {
        self.field_errors.clear();
        self.state.global_error = None;
    }

    /// True while a submission is in flight, or after a submission while the
    /// form is still invalid.
    pub fn submit_disabled(&self) -> bool {
        self.state.is_submitting || (self.state.has_been_submitted && !self.state.is_valid)
    }

    /// Validate current values and, when they pass, run the remote action on
    /// a snapshot of them. At most one submission is in flight per form;
    /// re-entrant calls are no-ops. The action must return a normalized
    /// [`SubmissionResult`]; it is never invoked on invalid input.
    ///
    /// # Examples
    /// ```
    /// use common::i18n::{Locale, Messages};
    /// use forms::{login_schema, FormController, SubmissionResult, SubmitOutcome};
    ///
    /// let messages = Messages::new(Locale::En);
    /// let mut form = FormController::new(login_schema(&messages));
    /// form.set_value("username", "sara");
    /// form.set_value("password", "secret");
    /// let outcome = tokio_test::block_on(form.submit(|_values| async {
    ///     SubmissionResult::Success { redirect_target: None }
    /// }));
    /// assert!(matches!(outcome, SubmitOutcome::Completed(_)));
    /// assert!(!form.state().is_submitting);
    /// ```
    pub async fn submit<F, Fut>(&mut self, action: F) -> SubmitOutcome
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = SubmissionResult>,
    {
        if self.state.is_submitting {
            debug!("submit ignored: a submission is already in flight");
            return SubmitOutcome::InFlight;
        }
        self.state.has_been_submitted = true;

        let errors = self.schema.validate(&self.values);
        if !errors.is_empty() {
            self.state.is_valid = false;
            self.field_errors.clear();
            for error in errors {
                self.field_errors.insert(error.field, error.message);
            }
            return SubmitOutcome::Invalid;
        }

        self.state.is_valid = true;
        self.state.global_error = None;
        self.field_errors.clear();

        self.state.is_submitting = true;
        let result = action(self.values.clone()).await;
        self.state.is_submitting = false;

        SubmitOutcome::Completed(result)
    }

    #[cfg(test)]
    pub(crate) fn force_submitting(&mut self, value: bool) {
        self.state.is_submitting = value;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use common::i18n::{Locale, Messages};

    use super::*;
    use crate::schema::{login_schema, register_schema};

    fn login_form() -> FormController {
        FormController::new(login_schema(&Messages::new(Locale::En)))
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_action() {
        let calls = AtomicUsize::new(0);
        let mut form = login_form();
        form.set_value("username", "ab");
        form.set_value("password", "");

        let outcome = form
            .submit(|_values| async {
                calls.fetch_add(1, Ordering::SeqCst);
                SubmissionResult::Success { redirect_target: None }
            })
            .await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(form.field_error("password").is_some());
        assert!(form.field_error("username").is_none());
        assert!(form.submit_disabled());
    }

    #[tokio::test]
    async fn valid_input_runs_the_action_on_a_snapshot() {
        let mut form = login_form();
        form.set_value("username", "sara");
        form.set_value("password", "secret");

        let outcome = form
            .submit(|values| async move {
                assert_eq!(values.get("username"), "sara");
                SubmissionResult::Success { redirect_target: Some("/dashboard".into()) }
            })
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Completed(SubmissionResult::Success {
                redirect_target: Some("/dashboard".into())
            })
        );
        assert!(!form.state().is_submitting);
        assert!(!form.submit_disabled());
    }

    #[tokio::test]
    async fn in_flight_guard_blocks_reentrant_submit() {
        let calls = AtomicUsize::new(0);
        let mut form = login_form();
        form.set_value("username", "sara");
        form.set_value("password", "secret");
        form.force_submitting(true);

        let outcome = form
            .submit(|_values| async {
                calls.fetch_add(1, Ordering::SeqCst);
                SubmissionResult::Success { redirect_target: None }
            })
            .await;

        assert_eq!(outcome, SubmitOutcome::InFlight);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        // The guard itself stays untouched by the no-op.
        assert!(form.state().is_submitting);
    }

    #[test]
    fn set_value_is_idempotent_and_clears_errors() {
        let mut form = login_form();
        form.set_field_error("username", "taken");

        form.set_value("username", "sara");
        assert!(form.field_error("username").is_none());

        let before = form.values().clone();
        form.set_value("username", "sara");
        assert_eq!(form.values(), &before);
        assert!(form.field_error("username").is_none());
    }

    #[test]
    fn unknown_field_values_are_ignored() {
        let mut form = login_form();
        form.set_value("nonexistentField", "x");
        assert!(!form.values().contains("nonexistentField"));
    }

    #[tokio::test]
    async fn editing_after_failed_submit_reopens_the_guard() {
        let mut form = FormController::new(register_schema(&Messages::new(Locale::En)));
        let outcome = form
            .submit(|_values| async { SubmissionResult::Success { redirect_target: None } })
            .await;
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(form.submit_disabled());

        form.set_value("username", "sara");
        form.set_value("firstName", "Sara");
        form.set_value("lastName", "Adel");
        form.set_value("email", "sara@example.com");
        form.set_value("password", "Abcdefg1");
        form.set_value("passwordConfirm", "Abcdefg1");
        assert!(!form.submit_disabled());
    }

    #[tokio::test]
    async fn a_new_attempt_drops_stale_errors() {
        let mut form = login_form();
        form.set_value("username", "sara");
        form.set_value("password", "secret");
        form.set_global_error("invalid credentials");
        form.set_field_error("username", "stale");

        let outcome = form
            .submit(|_values| async { SubmissionResult::Success { redirect_target: None } })
            .await;

        assert!(matches!(outcome, SubmitOutcome::Completed(_)));
        assert!(form.state().global_error.is_none());
        assert!(form.field_error("username").is_none());
    }
}
