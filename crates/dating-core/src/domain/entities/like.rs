//! Like entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A directed "like" from one member to another.
///
/// Stored at most once per ordered `(liker_id, likee_id)` pair and never
/// modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Like {
    pub liker_id: UserId,
    pub likee_id: UserId,
}

impl Like {
    #[must_use]
    pub const fn new(liker_id: UserId, likee_id: UserId) -> Self {
        Self { liker_id, likee_id }
    }
}
