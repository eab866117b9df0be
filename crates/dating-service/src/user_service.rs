//! User service trait definition.

use crate::dto::{UserForDetailedDto, UserForListDto, UserForUpdateDto};
use async_trait::async_trait;
use dating_core::{DatingResult, Interface, Page, UserId, UserParams};

/// Message returned when a like already exists.
pub const ALREADY_LIKED: &str = "You already liked the user";

/// Message returned when a like could not be stored.
pub const LIKE_FAILED: &str = "Failed to like user";

/// User service trait.
///
/// Callers pass ids that were already checked against the authenticated
/// identity.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Lists members for `params.user_id`. A missing gender defaults to the
    /// opposite of the requester's.
    async fn list_users(&self, params: UserParams) -> DatingResult<Page<UserForListDto>>;

    /// Gets one member's full profile.
    async fn get_user(&self, id: UserId) -> DatingResult<UserForDetailedDto>;

    /// Applies a profile edit and persists it.
    async fn update_user(&self, id: UserId, request: UserForUpdateDto) -> DatingResult<()>;

    /// Records that `liker` likes `recipient`.
    async fn like_user(&self, liker: UserId, recipient: UserId) -> DatingResult<()>;

    /// Stamps the member's `last_active` with the current time.
    async fn record_activity(&self, id: UserId) -> DatingResult<()>;
}
