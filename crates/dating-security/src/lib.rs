//! # Dating Security
//!
//! Bearer token handling for the DatingApp API: JWT claims, validation of
//! tokens issued by the identity service, and caller identity extraction.

pub mod jwt;

pub use jwt::*;
