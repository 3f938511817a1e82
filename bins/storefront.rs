use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // Load .env first so RUST_LOG and STOREFRONT_* variables take effect.
    dotenv().ok();
    common::utils::logging::init_logging_default();
    info!(service = "storefront", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    // Basic process context for log correlation; no sensitive data.
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new({
        let service_id = service_id;
        move |info| {
            error!(
                service = "storefront",
                event = "panic",
                %service_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    info!(
        service = "storefront",
        event = "start",
        %service_id,
        pid,
        version,
        "storefront client starting"
    );

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "storefront", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    rt.block_on(async move {
        match app::run().await {
            Ok(()) => {
                info!(service = "storefront", event = "stop", %service_id, pid, "storefront stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "storefront", event = "run_failed", error = %e, "app::run returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
