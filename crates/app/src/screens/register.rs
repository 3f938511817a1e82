use anyhow::Result;

use forms::{
    register_schema, submit_and_dispatch, AuthApi, Dispatcher, FormController, NavMode, Notice,
};

use super::{label_key, read_entry, Entry, InputLines};
use crate::router::{self, Route};
use crate::{feedback, App};

const FIELDS: [&str; 6] =
    ["username", "firstName", "lastName", "email", "password", "passwordConfirm"];

/// Account registration form. Success push-navigates to the login screen
/// and emits a one-shot toast.
pub async fn register(app: &App, lines: &mut InputLines) -> Result<Route> {
    let m = &app.messages;
    println!();
    println!("== {}", m.get("register-title"));

    let mut form = FormController::new(register_schema(m));
    loop {
        for field in FIELDS {
            let label = m.get(label_key(field));
            match read_entry(lines, &format!("{label}: ")).await? {
                Entry::Value(value) => form.set_value(field, value),
                Entry::Back => return Ok(Route::Home),
                Entry::Quit => return Ok(Route::Quit),
            }
        }

        let dispatcher = Dispatcher {
            navigator: &app.router,
            notifier: &app.toasts,
            default_redirect: "/auth/login",
            nav_mode: NavMode::Push,
            success_notice: Some(Notice {
                title: m.get("register-success-title").into(),
                description: m.get("register-success").into(),
            }),
        };
        submit_and_dispatch(&mut form, &dispatcher, |values| async move {
            app.api.register(&values).await
        })
        .await;

        feedback::render_field_errors(&form, &FIELDS);
        feedback::render_global(form.state());

        if let Some(nav) = app.router.take() {
            return Ok(router::parse(&nav.path).unwrap_or(Route::Login));
        }
    }
}
