//! Domain value objects.

mod gender;
mod user_params;

pub use gender::*;
pub use user_params::*;
