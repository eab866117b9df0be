//! MySQL repository implementations.

mod like_repository;
mod user_repository;

pub use like_repository::*;
pub use user_repository::*;
