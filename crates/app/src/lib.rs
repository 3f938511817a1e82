//! Terminal front-end: screens, navigation and feedback rendering around
//! the form pipeline and the API client.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use api::ApiClient;
use common::i18n::{Locale, Messages};

pub mod feedback;
pub mod router;
pub mod screens;

use router::{CliRouter, Route, ToastNotifier};

/// Shared state for the screen loop; one instance per process.
pub struct App {
    pub api: ApiClient,
    pub messages: Messages,
    pub router: CliRouter,
    pub toasts: ToastNotifier,
    pub page_size: u32,
}

/// Build state from configuration and run the screen loop until the user
/// quits or stdin closes.
pub async fn run() -> Result<()> {
    let cfg = configs::AppConfig::load_and_validate()?;
    let locale = Locale::parse(&cfg.ui.locale).unwrap_or_default();
    let messages = Messages::new(locale);
    let api = ApiClient::new(
        &cfg.api.base_url,
        cfg.api.timeout_secs,
        messages.get("fallback-error-message"),
    )?;
    info!(base_url = %cfg.api.base_url, locale = locale.as_str(), "storefront client ready");

    let app = App {
        api,
        messages,
        router: CliRouter::default(),
        toasts: ToastNotifier::default(),
        page_size: cfg.ui.page_size,
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut route = Route::Home;
    loop {
        route = match route {
            Route::Home => screens::home(&app, &mut lines).await?,
            Route::Login => screens::login(&app, &mut lines).await?,
            Route::Register => screens::register(&app, &mut lines).await?,
            Route::Dashboard => screens::dashboard(&app, &mut lines).await?,
            Route::Quit => break,
        };
    }
    info!("storefront client exiting");
    Ok(())
}
