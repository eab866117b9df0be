//! MySQL like repository implementation.

use crate::{traits::LikeRepository, DatabasePoolInterface};
use async_trait::async_trait;
use dating_core::{DatingResult, Like, UserId};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// MySQL like repository. The `(liker_id, likee_id)` primary key keeps
/// likes unique.
#[derive(Component, Clone)]
#[shaku(interface = LikeRepository)]
pub struct MySqlLikeRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlLikeRepository {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for MySqlLikeRepository {
    async fn find_like(&self, liker: UserId, likee: UserId) -> DatingResult<Option<Like>> {
        let row: Option<(i64, i64)> =
            sqlx::query_as("SELECT liker_id, likee_id FROM likes WHERE liker_id = ? AND likee_id = ?")
                .bind(liker.into_inner())
                .bind(likee.into_inner())
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(row.map(|(liker_id, likee_id)| Like::new(UserId::new(liker_id), UserId::new(likee_id))))
    }

    async fn insert_like(&self, like: Like) -> DatingResult<bool> {
        debug!("Inserting like {} -> {}", like.liker_id, like.likee_id);

        let result = sqlx::query("INSERT INTO likes (liker_id, likee_id) VALUES (?, ?)")
            .bind(like.liker_id.into_inner())
            .bind(like.likee_id.into_inner())
            .execute(self.pool.inner())
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                debug!("Like {} -> {} already stored", like.liker_id, like.likee_id);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl std::fmt::Debug for MySqlLikeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlLikeRepository").finish_non_exhaustive()
    }
}
