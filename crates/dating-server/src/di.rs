//! Dependency injection modules using Shaku.
//!
//! - `MySqlModule`: services backed by the MySQL pool
//! - `InMemoryModule`: services backed by a shared in-memory store

use dating_core::{module, HasComponent};
use dating_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, InMemoryLikeRepository,
    InMemoryLikeRepositoryParameters, InMemoryStore, InMemoryUserRepository,
    InMemoryUserRepositoryParameters, MySqlLikeRepository, MySqlUserRepository,
};
use dating_service::UserServiceImpl;
use std::sync::Arc;

// ============================================================================
// Shaku Module Definitions
// ============================================================================

module! {
    pub MySqlModule {
        components = [
            DatabasePool,
            MySqlUserRepository,
            MySqlLikeRepository,
            UserServiceImpl,
        ],
        providers = [],
    }
}

module! {
    pub InMemoryModule {
        components = [
            InMemoryUserRepository,
            InMemoryLikeRepository,
            UserServiceImpl,
        ],
        providers = [],
    }
}

// ============================================================================
// Module Builders
// ============================================================================

/// Builds the MySQL-backed module around an established pool.
pub fn build_mysql_module(db_pool: &DatabasePool) -> Arc<MySqlModule> {
    let module = MySqlModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .build();

    Arc::new(module)
}

/// Builds the in-memory module. Both repositories share `store`.
pub fn build_in_memory_module(store: Arc<InMemoryStore>) -> Arc<InMemoryModule> {
    let module = InMemoryModule::builder()
        .with_component_parameters::<InMemoryUserRepository>(InMemoryUserRepositoryParameters {
            store: Arc::clone(&store),
        })
        .with_component_parameters::<InMemoryLikeRepository>(InMemoryLikeRepositoryParameters {
            store,
        })
        .build();

    Arc::new(module)
}

// ============================================================================
// Module Resolution Helpers
// ============================================================================

/// Trait for resolving the database pool from modules that have one.
pub trait DatabaseResolver {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for MySqlModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
