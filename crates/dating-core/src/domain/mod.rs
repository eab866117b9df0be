//! # Dating Domain
//!
//! Domain entities and value objects of the dating site: members, their
//! photos, and the likes they exchange.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
