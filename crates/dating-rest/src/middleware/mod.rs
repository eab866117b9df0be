//! HTTP middleware.

mod activity;
mod auth;
mod logging;

pub use activity::*;
pub use auth::*;
pub use logging::*;
