//! # Dating REST
//!
//! REST API layer using Axum for the DatingApp API.
//! Provides the member endpoints under `/api/user` and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
