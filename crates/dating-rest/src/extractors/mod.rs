//! Custom Axum extractors.

mod claims;
mod user_params;
mod validated;

pub use claims::*;
pub use user_params::*;
pub use validated::*;
