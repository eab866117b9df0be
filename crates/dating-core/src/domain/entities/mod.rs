//! Domain entities.

mod like;
mod photo;
mod user;

pub use like::*;
pub use photo::*;
pub use user::*;
