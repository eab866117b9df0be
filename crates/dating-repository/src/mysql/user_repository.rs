//! MySQL user repository implementation.

use crate::{traits::UserRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use dating_core::{DatingError, DatingResult, Page, Photo, PhotoId, User, UserId, UserOrder, UserParams};
use shaku::Component;
use sqlx::{FromRow, MySql, QueryBuilder};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

const USER_COLUMNS: &str = "SELECT u.id, u.username, u.gender, u.date_of_birth, u.known_as, \
     u.created, u.last_active, u.introduction, u.looking_for, u.interests, u.city, u.country \
     FROM users u";

const PHOTO_COLUMNS: &str = "SELECT id, url, description, date_added, is_main, user_id FROM photos";

/// MySQL user repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct MySqlUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn photos_for(&self, user_ids: &[i64]) -> DatingResult<HashMap<i64, Vec<Photo>>> {
        let mut grouped: HashMap<i64, Vec<Photo>> = HashMap::new();
        if user_ids.is_empty() {
            return Ok(grouped);
        }

        let mut query = QueryBuilder::<MySql>::new(PHOTO_COLUMNS);
        query.push(" WHERE user_id IN (");
        let mut ids = query.separated(", ");
        for id in user_ids {
            ids.push_bind(*id);
        }
        ids.push_unseparated(") ORDER BY id");

        let rows: Vec<PhotoRow> = query.build_query_as().fetch_all(self.pool.inner()).await?;
        for row in rows {
            grouped.entry(row.user_id).or_default().push(row.into());
        }
        Ok(grouped)
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    gender: String,
    date_of_birth: NaiveDate,
    known_as: String,
    created: DateTime<Utc>,
    last_active: DateTime<Utc>,
    introduction: Option<String>,
    looking_for: Option<String>,
    interests: Option<String>,
    city: String,
    country: String,
}

impl UserRow {
    fn into_user(self, photos: Vec<Photo>) -> DatingResult<User> {
        let gender = self
            .gender
            .parse()
            .map_err(|_| DatingError::Internal(format!("Invalid gender in database: {}", self.gender)))?;

        Ok(User {
            id: UserId::new(self.id),
            username: self.username,
            gender,
            date_of_birth: self.date_of_birth,
            known_as: self.known_as,
            created: self.created,
            last_active: self.last_active,
            introduction: self.introduction,
            looking_for: self.looking_for,
            interests: self.interests,
            city: self.city,
            country: self.country,
            photos,
        })
    }
}

#[derive(Debug, FromRow)]
struct PhotoRow {
    id: i64,
    url: String,
    description: Option<String>,
    date_added: DateTime<Utc>,
    is_main: bool,
    user_id: i64,
}

impl From<PhotoRow> for Photo {
    fn from(row: PhotoRow) -> Self {
        Self {
            id: PhotoId::new(row.id),
            url: row.url,
            description: row.description,
            date_added: row.date_added,
            is_main: row.is_main,
            user_id: UserId::new(row.user_id),
        }
    }
}

/// Appends the WHERE clause shared by the count and page queries.
fn push_filters(query: &mut QueryBuilder<'_, MySql>, params: &UserParams, today: NaiveDate) {
    let requester = params.user_id.into_inner();

    query.push(" WHERE u.id <> ").push_bind(requester);

    if let Some(gender) = params.gender {
        query.push(" AND u.gender = ").push_bind(gender.as_str());
    }

    if params.likers {
        query
            .push(" AND u.id IN (SELECT liker_id FROM likes WHERE likee_id = ")
            .push_bind(requester)
            .push(")");
    }

    if params.likees {
        query
            .push(" AND u.id IN (SELECT likee_id FROM likes WHERE liker_id = ")
            .push_bind(requester)
            .push(")");
    }

    if params.has_age_filter() {
        let (earliest, latest) = params.date_of_birth_range(today);
        query
            .push(" AND u.date_of_birth BETWEEN ")
            .push_bind(earliest)
            .push(" AND ")
            .push_bind(latest);
    }
}

const fn order_clause(order: UserOrder) -> &'static str {
    match order {
        UserOrder::Created => " ORDER BY u.created DESC, u.id DESC",
        UserOrder::LastActive => " ORDER BY u.last_active DESC, u.id DESC",
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: UserId) -> DatingResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(&format!("{USER_COLUMNS} WHERE u.id = ?"))
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let photos = self
            .photos_for(&[row.id])
            .await?
            .remove(&row.id)
            .unwrap_or_default();

        row.into_user(photos).map(Some)
    }

    async fn find_page(&self, params: &UserParams) -> DatingResult<Page<User>> {
        debug!(
            "Finding users for {}, page: {}, size: {}",
            params.user_id, params.page.page, params.page.size
        );
        let today = Utc::now().date_naive();

        let mut count = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM users u");
        push_filters(&mut count, params, today);
        let total: i64 = count.build_query_scalar().fetch_one(self.pool.inner()).await?;

        let limit = i64::try_from(params.page.limit()).unwrap_or(i64::MAX);
        let offset = i64::try_from(params.page.offset()).unwrap_or(i64::MAX);

        let mut select = QueryBuilder::<MySql>::new(USER_COLUMNS);
        push_filters(&mut select, params, today);
        select
            .push(order_clause(params.order_by))
            .push(" LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows: Vec<UserRow> = select.build_query_as().fetch_all(self.pool.inner()).await?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut photos = self.photos_for(&ids).await?;

        let users = rows
            .into_iter()
            .map(|row| {
                let user_photos = photos.remove(&row.id).unwrap_or_default();
                row.into_user(user_photos)
            })
            .collect::<DatingResult<Vec<_>>>()?;

        Ok(Page::new(users, params.page, u64::try_from(total).unwrap_or(0)))
    }

    async fn update(&self, user: &User) -> DatingResult<()> {
        debug!("Updating user: {}", user.id);

        sqlx::query(
            r"
            UPDATE users
            SET known_as = ?, introduction = ?, looking_for = ?, interests = ?,
                city = ?, country = ?
            WHERE id = ?
            ",
        )
        .bind(&user.known_as)
        .bind(&user.introduction)
        .bind(&user.looking_for)
        .bind(&user.interests)
        .bind(&user.city)
        .bind(&user.country)
        .bind(user.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn touch_last_active(&self, id: UserId, at: DateTime<Utc>) -> DatingResult<()> {
        sqlx::query("UPDATE users SET last_active = ? WHERE id = ?")
            .bind(at)
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

impl std::fmt::Debug for MySqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserRepository").finish_non_exhaustive()
    }
}
