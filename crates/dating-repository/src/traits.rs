//! Repository trait definitions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dating_core::{DatingResult, Interface, Like, Page, User, UserId, UserParams};

/// User repository trait.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Finds a user, with photos, by ID.
    async fn find_by_id(&self, id: UserId) -> DatingResult<Option<User>>;

    /// Returns one page of users visible to `params.user_id`.
    ///
    /// Excludes the requester, keeps only `params.gender` when set, applies
    /// the age window when it differs from the default, restricts to the
    /// requester's likers or likees when asked, and orders newest first by
    /// `params.order_by`.
    async fn find_page(&self, params: &UserParams) -> DatingResult<Page<User>>;

    /// Persists the editable profile fields of an existing user.
    ///
    /// Success means the write went through, not that a row changed.
    async fn update(&self, user: &User) -> DatingResult<()>;

    /// Sets a user's `last_active` timestamp.
    async fn touch_last_active(&self, id: UserId, at: DateTime<Utc>) -> DatingResult<()>;
}

/// Like repository trait.
#[async_trait]
pub trait LikeRepository: Interface + Send + Sync {
    /// Finds the like from `liker` to `likee`, if any.
    async fn find_like(&self, liker: UserId, likee: UserId) -> DatingResult<Option<Like>>;

    /// Stores a like unless the pair already exists.
    ///
    /// Returns `false` when an identical like was already stored.
    async fn insert_like(&self, like: Like) -> DatingResult<bool>;
}
