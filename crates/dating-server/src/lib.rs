//! # Dating Server Library
//!
//! Dependency injection wiring and startup helpers for the DatingApp API
//! server.

pub mod di;
pub mod startup;
