use anyhow::Result;

use forms::{login_schema, submit_and_dispatch, AuthApi, Dispatcher, FormController, NavMode};

use super::{label_key, read_entry, Entry, InputLines};
use crate::router::{self, Route};
use crate::{feedback, App};

const FIELDS: [&str; 2] = ["username", "password"];

/// Credential sign-in form. A successful submission replace-navigates to
/// the response's redirect target, `/dashboard` by default.
pub async fn login(app: &App, lines: &mut InputLines) -> Result<Route> {
    let m = &app.messages;
    println!();
    println!("== {}", m.get("login-title"));

    let mut form = FormController::new(login_schema(m));
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
            default_redirect: "/dashboard",
            nav_mode: NavMode::Replace,
            success_notice: None,
        };
        submit_and_dispatch(&mut form, &dispatcher, |values| async move {
            app.api.sign_in(&values).await
        })
        .await;

        feedback::render_field_errors(&form, &FIELDS);
        feedback::render_global(form.state());

        if let Some(nav) = app.router.take() {
            return Ok(router::parse(&nav.path).unwrap_or(Route::Dashboard));
        }
    }
}
