//! Photo entity.

use crate::{PhotoId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A photo attached to a member profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub url: String,
    pub description: Option<String>,
    pub date_added: DateTime<Utc>,
    /// At most one photo per user is the main one.
    pub is_main: bool,
    pub user_id: UserId,
}

impl Photo {
    /// Creates a photo added now. The owner is set when attached to a user.
    #[must_use]
    pub fn new(id: PhotoId, url: impl Into<String>, is_main: bool) -> Self {
        Self {
            id,
            url: url.into(),
            description: None,
            date_added: Utc::now(),
            is_main,
            user_id: UserId::new(0),
        }
    }
}
