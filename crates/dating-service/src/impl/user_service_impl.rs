//! User service implementation.

use crate::dto::{UserForDetailedDto, UserForListDto, UserForUpdateDto};
use crate::mappers::UserMapper;
use crate::user_service::{UserService, ALREADY_LIKED, LIKE_FAILED};
use async_trait::async_trait;
use chrono::Utc;
use dating_core::{DatingError, DatingResult, Like, Page, User, UserId, UserParams, ValidateExt};
use dating_repository::{LikeRepository, UserRepository};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// User service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
    #[shaku(inject)]
    like_repository: Arc<dyn LikeRepository>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>, like_repository: Arc<dyn LikeRepository>) -> Self {
        Self {
            user_repository,
            like_repository,
        }
    }

    async fn require_user(&self, id: UserId) -> DatingResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DatingError::not_found("User", id))
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self, mut params: UserParams) -> DatingResult<Page<UserForListDto>> {
        debug!(
            "Listing users for {}, page: {}, size: {}",
            params.user_id, params.page.page, params.page.size
        );

        let requester = self.require_user(params.user_id).await?;

        if params.gender.is_none() {
            params.gender = Some(requester.gender.opposite());
        }

        let users = self.user_repository.find_page(&params).await?;
        let today = Utc::now().date_naive();
        Ok(users.map(|user| UserMapper::list_dto_on(&user, today)))
    }

    async fn get_user(&self, id: UserId) -> DatingResult<UserForDetailedDto> {
        debug!("Getting user: {}", id);

        let user = self.require_user(id).await?;
        Ok(UserMapper::detailed_dto_on(&user, Utc::now().date_naive()))
    }

    async fn update_user(&self, id: UserId, request: UserForUpdateDto) -> DatingResult<()> {
        debug!("Updating user: {}", id);

        request.validate_request()?;

        let mut user = self.require_user(id).await?;
        UserMapper::apply_update(&request, &mut user);

        self.user_repository.update(&user).await.map_err(|e| {
            error!("Updating user {} failed on save: {}", id, e);
            DatingError::persistence(id, e)
        })?;

        info!("User updated: {}", id);
        Ok(())
    }

    async fn like_user(&self, liker: UserId, recipient: UserId) -> DatingResult<()> {
        debug!("User {} likes {}", liker, recipient);

        if self.like_repository.find_like(liker, recipient).await?.is_some() {
            return Err(DatingError::bad_request(ALREADY_LIKED));
        }

        if self.user_repository.find_by_id(recipient).await?.is_none() {
            return Err(DatingError::not_found("User", recipient));
        }

        match self.like_repository.insert_like(Like::new(liker, recipient)).await {
            Ok(true) => {
                info!("User {} liked {}", liker, recipient);
                Ok(())
            }
            Ok(false) => Err(DatingError::bad_request(ALREADY_LIKED)),
            Err(e) => {
                warn!("Storing like {} -> {} failed: {}", liker, recipient, e);
                Err(DatingError::bad_request(LIKE_FAILED))
            }
        }
    }

    async fn record_activity(&self, id: UserId) -> DatingResult<()> {
        self.user_repository.touch_last_active(id, Utc::now()).await
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
