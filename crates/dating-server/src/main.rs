//! # DatingApp API Server
//!
//! Loads configuration, wires the services for the configured store
//! (`memory://` or MySQL) and serves the REST API until shutdown.

use dating_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use dating_core::{DatingError, DatingResult};
use dating_repository::{demo_users, DatabaseHealthCheck, DatabasePool, DatabasePoolInterface, InMemoryStore};
use dating_rest::{create_router, middleware::AuthMiddlewareState, AppState};
use dating_security::TokenProvider;
use dating_server::{
    di::{build_in_memory_module, build_mysql_module, DatabaseResolver},
    startup::{init_tracing, print_banner, print_startup_info, shutdown_signal},
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            init_tracing(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.observability);
    print_banner();
    info!("Starting {} v{}", config.app.name, env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> DatingResult<()> {
    let token_provider = Arc::new(TokenProvider::new(Arc::new(config.security.clone())));
    let auth = AuthMiddlewareState::new(token_provider);

    let (state, db_pool, storage) = if config.database.is_in_memory() {
        warn!("Using the in-memory store seeded with demo members; data is lost on shutdown");
        let store = Arc::new(InMemoryStore::with_users(demo_users()));
        let module = build_in_memory_module(Arc::clone(&store));
        let state = AppState::from_module(module.as_ref()).with_health_check(store);
        (state, None, "memory")
    } else {
        let pool = DatabasePool::connect(&config.database).await?;
        if config.database.run_migrations {
            pool.run_migrations().await?;
        }
        let module = build_mysql_module(&pool);
        let db_pool = module.database_pool();
        let state = AppState::from_module(module.as_ref())
            .with_health_check(Arc::new(DatabaseHealthCheck::new(Arc::clone(&db_pool))));
        (state, Some(db_pool), "mysql")
    };

    let router = create_router(state, auth, &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| DatingError::Internal(format!("Failed to bind {addr}: {e}")))?;

    print_startup_info(&config.server, storage);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DatingError::Internal(format!("REST server error: {e}")))?;

    if let Some(db_pool) = db_pool {
        db_pool.close().await;
    }

    info!("Server shutdown complete");
    Ok(())
}
