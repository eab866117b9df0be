//! # Dating Service
//!
//! Business logic service layer for the DatingApp API: member browsing,
//! profile editing and likes.

pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod user_service;

pub use dto::*;
pub use mappers::*;
pub use r#impl::*;
pub use user_service::*;
