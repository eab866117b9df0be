//! # Dating Repository
//!
//! Data access for the DatingApp API.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository> / Arc<dyn LikeRepository>
//! MySqlUserRepository, MySqlLikeRepository   (SQLx)
//!   or InMemoryUserRepository, InMemoryLikeRepository (shared InMemoryStore)
//! ```

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::*;
pub use mysql::*;
pub use pool::*;
pub use traits::*;
