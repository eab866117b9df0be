//! Server startup utilities.

use dating_config::{ObservabilityConfig, ServerConfig};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directives appended to the configured log level.
const DEFAULT_DIRECTIVES: &str = "tower_http=debug,sqlx=warn";

/// Builds the log filter. `RUST_LOG` wins over configuration.
pub fn log_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},{DEFAULT_DIRECTIVES}", config.log_level)))
}

/// Installs the global tracing subscriber.
///
/// Returns false when a subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let registry = tracing_subscriber::registry().with(log_filter(config));

    let result = if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.is_ok()
}

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r"
    ____        __  _             ___
   / __ \____ _/ /_(_)___  ____ _/   |  ____  ____
  / / / / __ `/ __/ / __ \/ __ `/ /| | / __ \/ __ \
 / /_/ / /_/ / /_/ / / / / /_/ / ___ |/ /_/ / /_/ /
/_____/\__,_/\__/_/_/ /_/\__, /_/  |_/ .___/ .___/
                        /____/      /_/   /_/
    "
    );
}

/// Prints server startup information.
pub fn print_startup_info(server: &ServerConfig, storage: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api/user", server.addr());
    info!("Health:    http://{}/health", server.addr());
    info!("API Docs:  http://{}/swagger-ui", server.addr());
    info!("Storage:   {}", storage);
    info!("{}", separator);
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
