//! Feedback presentation: a pure read of the controller's error state.

use forms::{FormController, SubmissionState};

/// The global feedback line; nothing when there is no error to show.
pub fn feedback_message(state: &SubmissionState) -> Option<&str> {
    state.global_error.as_deref().filter(|m| !m.is_empty())
}

/// Print the global error banner, if any.
pub fn render_global(state: &SubmissionState) {
    if let Some(message) = feedback_message(state) {
        println!("!! {message}");
    }
}

/// Print inline field errors beneath the form, in display order.
pub fn render_field_errors(form: &FormController, fields: &[&str]) {
    for field in fields {
        if let Some(message) = form.field_error(field) {
            println!("   {field}: {message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nothing_without_error() {
        let state = SubmissionState::default();
        assert_eq!(feedback_message(&state), None);
    }

    #[test]
    fn empty_message_renders_nothing() {
        let state = SubmissionState { global_error: Some(String::new()), ..Default::default() };
        assert_eq!(feedback_message(&state), None);
    }

    #[test]
    fn renders_the_message_otherwise() {
        let state = SubmissionState {
            global_error: Some("invalid credentials".into()),
            ..Default::default()
        };
        assert_eq!(feedback_message(&state), Some("invalid credentials"));
    }
}
