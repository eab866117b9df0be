//! # Dating Config
//!
//! Configuration management for the DatingApp API.
//! Supports layered configuration from files, `.env` and environment
//! variables.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
