//! # Dating Client
//!
//! Client-side pieces of the DatingApp: the session state held by the
//! browser, user-facing alerts, navigation and the route guard that keeps
//! anonymous visitors out of member views.

pub mod alert;
pub mod guard;
pub mod navigation;
pub mod session;

pub use alert::*;
pub use guard::*;
pub use navigation::*;
pub use session::*;
