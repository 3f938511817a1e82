use std::future::Future;

use tracing::{info, warn};

use crate::controller::{FormController, SubmitOutcome};
use crate::domain::{FormValues, SubmissionResult};

/// Fire-and-forget route change requests.
pub trait Navigator {
    fn replace(&self, path: &str);
    fn push(&self, path: &str);
}

/// Fire-and-forget user notification; no return value is consumed.
pub trait Notifier {
    fn notify(&self, title: &str, description: &str);
}

/// How a success redirect is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    Replace,
    Push,
}

/// One-shot success notification content.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

/// Maps a normalized [`SubmissionResult`] onto controller state and UI
/// effects. One instance per form, bundling the collaborators with the
/// form's redirect and notification policy.
pub struct Dispatcher<'a> {
    pub navigator: &'a dyn Navigator,
    pub notifier: &'a dyn Notifier,
    pub default_redirect: &'a str,
    pub nav_mode: NavMode,
    pub success_notice: Option<Notice>,
}

impl Dispatcher<'_> {
    /// Apply one result. No result triggers more than one navigation and at
    /// most one notification.
    pub fn apply(&self, result: SubmissionResult, controller: &mut FormController) {
        match result {
            SubmissionResult::Success { redirect_target } => {
                controller.clear_errors();
                let target = redirect_target.as_deref().unwrap_or(self.default_redirect);
                match self.nav_mode {
                    NavMode::Replace => self.navigator.replace(target),
                    NavMode::Push => self.navigator.push(target),
                }
                if let Some(notice) = &self.success_notice {
                    self.notifier.notify(&notice.title, &notice.description);
                }
                info!(redirect = target, "submission succeeded");
            }
            SubmissionResult::FieldErrors(errors) => {
                for error in errors {
                    if controller.has_field(&error.field) {
                        controller.set_field_error(&error.field, error.message);
                    } else {
                        // The backend named a field this form does not know.
                        // Surface the message globally instead of dropping it.
                        warn!(field = %error.field, "escalating error on unknown field");
                        controller.set_global_error(error.message);
                    }
                }
            }
            SubmissionResult::GlobalError { message } => {
                controller.set_global_error(message);
            }
        }
    }
}

/// Drive one full submit cycle: guard, validate, invoke, dispatch. Screens
/// go through this so every completed submission is dispatched exactly once.
pub async fn submit_and_dispatch<F, Fut>(
    controller: &mut FormController,
    dispatcher: &Dispatcher<'_>,
    action: F,
) -> SubmitOutcome
where
    F: FnOnce(FormValues) -> Fut,
    Fut: Future<Output = SubmissionResult>,
{
    let outcome = controller.submit(action).await;
    if let SubmitOutcome::Completed(result) = &outcome {
        dispatcher.apply(result.clone(), controller);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use common::i18n::{Locale, Messages};

    use super::*;
    use crate::domain::FieldError;
    use crate::schema::{login_schema, register_schema};

    #[derive(Default)]
    struct RecordingNavigator {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingNavigator {
        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn replace(&self, path: &str) {
            self.calls.lock().unwrap().push(("replace".into(), path.into()));
        }

        fn push(&self, path: &str) {
            self.calls.lock().unwrap().push(("push".into(), path.into()));
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<(String, String)>>,
    }

    impl RecordingNotifier {
        fn notices(&self) -> Vec<(String, String)> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, title: &str, description: &str) {
            self.notices.lock().unwrap().push((title.into(), description.into()));
        }
    }

    fn login_form() -> FormController {
        FormController::new(login_schema(&Messages::new(Locale::En)))
    }

    #[test]
    fn success_navigates_to_explicit_target() {
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let dispatcher = Dispatcher {
            navigator: &navigator,
            notifier: &notifier,
            default_redirect: "/dashboard",
            nav_mode: NavMode::Replace,
            success_notice: None,
        };
        let mut form = login_form();
        form.set_global_error("old failure");

        dispatcher.apply(
            SubmissionResult::Success { redirect_target: Some("/dashboard".into()) },
            &mut form,
        );

        assert_eq!(navigator.calls(), vec![("replace".into(), "/dashboard".into())]);
        assert!(notifier.notices().is_empty());
        assert!(form.state().global_error.is_none());
    }

    #[test]
    fn success_falls_back_to_default_route_and_notifies_once() {
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let dispatcher = Dispatcher {
            navigator: &navigator,
            notifier: &notifier,
            default_redirect: "/auth/login",
            nav_mode: NavMode::Push,
            success_notice: Some(Notice {
                title: "Account created".into(),
                description: "You can now log in".into(),
            }),
        };
        let mut form = login_form();

        dispatcher.apply(SubmissionResult::Success { redirect_target: None }, &mut form);

        assert_eq!(navigator.calls(), vec![("push".into(), "/auth/login".into())]);
        assert_eq!(notifier.notices().len(), 1);
    }

    #[test]
    fn known_field_errors_attach_to_their_fields() {
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let dispatcher = Dispatcher {
            navigator: &navigator,
            notifier: &notifier,
            default_redirect: "/auth/login",
            nav_mode: NavMode::Push,
            success_notice: None,
        };
        let mut form = FormController::new(register_schema(&Messages::new(Locale::En)));

        dispatcher.apply(
            SubmissionResult::FieldErrors(vec![FieldError::new("email", "taken")]),
            &mut form,
        );

        assert_eq!(form.field_error("email"), Some("taken"));
        assert!(form.state().global_error.is_none());
        assert!(navigator.calls().is_empty());
    }

    #[test]
    fn unknown_field_errors_escalate_to_global() {
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let dispatcher = Dispatcher {
            navigator: &navigator,
            notifier: &notifier,
            default_redirect: "/auth/login",
            nav_mode: NavMode::Push,
            success_notice: None,
        };
        let mut form = login_form();

        dispatcher.apply(
            SubmissionResult::FieldErrors(vec![FieldError::new("nonexistentField", "X")]),
            &mut form,
        );

        assert_eq!(form.state().global_error.as_deref(), Some("X"));
        assert!(form.field_error("nonexistentField").is_none());
    }

    #[test]
    fn global_errors_keep_the_form_editable() {
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let dispatcher = Dispatcher {
            navigator: &navigator,
            notifier: &notifier,
            default_redirect: "/dashboard",
            nav_mode: NavMode::Replace,
            success_notice: None,
        };
        let mut form = login_form();
        form.set_value("username", "sara");

        dispatcher.apply(
            SubmissionResult::GlobalError { message: "invalid credentials".into() },
            &mut form,
        );

        assert_eq!(form.state().global_error.as_deref(), Some("invalid credentials"));
        assert_eq!(form.value("username"), "sara");
        assert!(navigator.calls().is_empty());
    }
}
