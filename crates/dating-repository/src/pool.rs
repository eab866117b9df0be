//! MySQL connection pool.

use async_trait::async_trait;
use dating_config::DatabaseConfig;
use dating_core::{DatingError, DatingResult, HealthCheck, HealthStatus, Interface};
use shaku::Component;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared handle to the MySQL pool, resolvable from the DI module.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    fn inner(&self) -> &MySqlPool;

    /// Round-trips `SELECT 1` through a pooled connection.
    async fn ping(&self) -> DatingResult<()>;

    /// Applies the embedded schema migrations.
    async fn run_migrations(&self) -> DatingResult<()>;

    async fn close(&self);
}

/// MySQL pool registered as a shaku component.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Opens the pool and waits for the first connection.
    pub async fn connect(config: &DatabaseConfig) -> DatingResult<Self> {
        info!(
            min = config.min_connections,
            max = config.max_connections,
            "Opening MySQL pool"
        );

        let pool = MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect(&config.url)
            .await
            .map_err(|e| {
                warn!("MySQL is unreachable: {}", e);
                DatingError::Database(format!("Failed to connect: {e}"))
            })?;

        Ok(Self { pool })
    }

    #[must_use]
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    async fn ping(&self) -> DatingResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DatingError::Database(format!("Ping failed: {e}")))
    }

    async fn run_migrations(&self) -> DatingResult<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DatingError::Database(format!("Migration failed: {e}")))?;
        info!("Schema is up to date");
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("MySQL pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("idle", &self.pool.num_idle())
            .finish()
    }
}

/// Readiness probe for MySQL.
///
/// Reports `Degraded` when every connection is checked out.
pub struct DatabaseHealthCheck {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl DatabaseHealthCheck {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for DatabaseHealthCheck {
    fn name(&self) -> &str {
        "mysql"
    }

    async fn check(&self) -> HealthStatus {
        if let Err(e) = self.pool.ping().await {
            return HealthStatus::Unhealthy(e.to_string());
        }

        let pool = self.pool.inner();
        let max = pool.options().get_max_connections();
        if pool.num_idle() == 0 && pool.size() >= max {
            return HealthStatus::Degraded(format!("all {max} connections in use"));
        }
        HealthStatus::Healthy
    }
}
