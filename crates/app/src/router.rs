//! Navigation and notification collaborators for the terminal shell.

use std::sync::Mutex;

use tracing::info;

use forms::{Navigator, Notifier};

/// Screens reachable in the terminal shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    Quit,
}

/// Map a backend-style path onto a screen route.
pub fn parse(path: &str) -> Option<Route> {
    match path.trim_end_matches('/') {
        "" => Some(Route::Home),
        "/auth/login" => Some(Route::Login),
        "/auth/register" => Some(Route::Register),
        "/dashboard" => Some(Route::Dashboard),
        _ => None,
    }
}

/// A route change left behind by the dispatcher for the screen loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRequest {
    pub path: String,
    pub replaced: bool,
}

/// Collects fire-and-forget navigation requests; the latest one wins.
#[derive(Debug, Default)]
pub struct CliRouter {
    pending: Mutex<Option<NavRequest>>,
}

impl CliRouter {
    /// Consume the pending navigation, if any.
    pub fn take(&self) -> Option<NavRequest> {
        self.pending.lock().unwrap().take()
    }
}

impl Navigator for CliRouter {
    fn replace(&self, path: &str) {
        info!(path, "navigate (replace)");
        *self.pending.lock().unwrap() = Some(NavRequest { path: path.into(), replaced: true });
    }

    fn push(&self, path: &str) {
        info!(path, "navigate (push)");
        *self.pending.lock().unwrap() = Some(NavRequest { path: path.into(), replaced: false });
    }
}

/// Prints one-shot toasts to the terminal.
#[derive(Debug, Default)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&self, title: &str, description: &str) {
        info!(title, "notification");
        println!("** {title}: {description}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(parse("/dashboard"), Some(Route::Dashboard));
        assert_eq!(parse("/auth/login"), Some(Route::Login));
        assert_eq!(parse("/auth/register/"), Some(Route::Register));
        assert_eq!(parse("/"), Some(Route::Home));
        assert_eq!(parse("/unknown"), None);
    }

    #[test]
    fn latest_navigation_wins() {
        let router = CliRouter::default();
        router.push("/auth/login");
        router.replace("/dashboard");
        assert_eq!(
            router.take(),
            Some(NavRequest { path: "/dashboard".into(), replaced: true })
        );
        assert_eq!(router.take(), None);
    }
}
