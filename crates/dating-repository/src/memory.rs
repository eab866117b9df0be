//! In-memory repositories.
//!
//! Used by the server when `database.url` starts with `memory://`, and by
//! tests across the workspace. Both repositories share one [`InMemoryStore`].

use crate::traits::{LikeRepository, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use dating_core::{
    DatingResult, Gender, HealthCheck, HealthStatus, Like, Page, Photo, PhotoId, User, UserBuilder,
    UserId, UserOrder, UserParams,
};
use parking_lot::RwLock;
use shaku::Component;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Shared state behind the in-memory repositories.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<BTreeMap<UserId, User>>,
    likes: RwLock<HashSet<Like>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given users.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let store = Self::new();
        for user in users {
            store.insert_user(user);
        }
        store
    }

    /// Inserts or replaces a user.
    pub fn insert_user(&self, user: User) {
        self.users.write().insert(user.id, user);
    }

    /// Returns a copy of a stored user.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<User> {
        self.users.read().get(&id).cloned()
    }

    /// Number of stored likes.
    #[must_use]
    pub fn like_count(&self) -> usize {
        self.likes.read().len()
    }

    fn matching_users(&self, params: &UserParams, today: NaiveDate) -> Vec<User> {
        let users = self.users.read();
        let likes = self.likes.read();
        let requester = params.user_id;

        let mut matches: Vec<User> = users
            .values()
            .filter(|u| u.id != requester)
            .filter(|u| params.gender.map_or(true, |g| u.gender == g))
            .filter(|u| !params.likers || likes.contains(&Like::new(u.id, requester)))
            .filter(|u| !params.likees || likes.contains(&Like::new(requester, u.id)))
            .filter(|u| params.admits_birth_date(u.date_of_birth, today))
            .cloned()
            .collect();

        match params.order_by {
            UserOrder::Created => matches.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id))),
            UserOrder::LastActive => {
                matches.sort_by(|a, b| b.last_active.cmp(&a.last_active).then(b.id.cmp(&a.id)));
            }
        }
        matches
    }
}

#[async_trait]
impl HealthCheck for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn check(&self) -> HealthStatus {
        HealthStatus::Healthy
    }
}

/// In-memory user repository.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> DatingResult<Option<User>> {
        debug!("Finding user by id: {}", id);
        Ok(self.store.user(id))
    }

    async fn find_page(&self, params: &UserParams) -> DatingResult<Page<User>> {
        let matches = self.store.matching_users(params, Utc::now().date_naive());
        Ok(Page::from_vec(matches, params.page))
    }

    async fn update(&self, user: &User) -> DatingResult<()> {
        debug!("Updating user: {}", user.id);
        let mut users = self.store.users.write();
        if let Some(stored) = users.get_mut(&user.id) {
            stored.known_as.clone_from(&user.known_as);
            stored.introduction.clone_from(&user.introduction);
            stored.looking_for.clone_from(&user.looking_for);
            stored.interests.clone_from(&user.interests);
            stored.city.clone_from(&user.city);
            stored.country.clone_from(&user.country);
        }
        Ok(())
    }

    async fn touch_last_active(&self, id: UserId, at: DateTime<Utc>) -> DatingResult<()> {
        if let Some(user) = self.store.users.write().get_mut(&id) {
            user.touch(at);
        }
        Ok(())
    }
}

/// In-memory like repository.
#[derive(Component, Clone)]
#[shaku(interface = LikeRepository)]
pub struct InMemoryLikeRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryLikeRepository {
    #[must_use]
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn find_like(&self, liker: UserId, likee: UserId) -> DatingResult<Option<Like>> {
        let like = Like::new(liker, likee);
        Ok(self.store.likes.read().get(&like).copied())
    }

    async fn insert_like(&self, like: Like) -> DatingResult<bool> {
        debug!("Inserting like {} -> {}", like.liker_id, like.likee_id);
        Ok(self.store.likes.write().insert(like))
    }
}

/// A handful of members for local development against `memory://`.
#[must_use]
pub fn demo_users() -> Vec<User> {
    let now = Utc::now();
    let born = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let photo = |id: i64, name: &str| {
        Photo::new(
            PhotoId::new(id),
            format!("https://randomuser.me/api/portraits/{name}.jpg"),
            true,
        )
    };

    vec![
        UserBuilder::new(1, "lola")
            .gender(Gender::Female)
            .known_as("Lola")
            .date_of_birth(born(1992, 4, 11))
            .city("Greenbush")
            .country("Martinique")
            .introduction("Coffee first, then adventures.")
            .created(now - Duration::days(120))
            .last_active(now - Duration::hours(2))
            .photo(photo(1, "women/54"))
            .build(),
        UserBuilder::new(2, "todd")
            .gender(Gender::Male)
            .known_as("Todd")
            .date_of_birth(born(1988, 9, 30))
            .city("Norwood")
            .country("Puerto Rico")
            .created(now - Duration::days(90))
            .last_active(now - Duration::days(1))
            .photo(photo(2, "men/12"))
            .build(),
        UserBuilder::new(3, "mae")
            .gender(Gender::Female)
            .known_as("Mae")
            .date_of_birth(born(1996, 1, 5))
            .city("Springville")
            .country("Norway")
            .created(now - Duration::days(30))
            .last_active(now - Duration::minutes(15))
            .photo(photo(3, "women/33"))
            .build(),
        UserBuilder::new(4, "rhodes")
            .gender(Gender::Male)
            .known_as("Rhodes")
            .date_of_birth(born(1979, 12, 24))
            .city("Ernstville")
            .country("Ecuador")
            .created(now - Duration::days(400))
            .last_active(now - Duration::days(7))
            .photo(photo(4, "men/41"))
            .build(),
        UserBuilder::new(5, "karen")
            .gender(Gender::Female)
            .known_as("Karen")
            .date_of_birth(born(1985, 7, 19))
            .city("Lithium")
            .country("Ireland")
            .created(now - Duration::days(60))
            .last_active(now - Duration::hours(30))
            .photo(photo(5, "women/68"))
            .build(),
        UserBuilder::new(6, "haynes")
            .gender(Gender::Male)
            .known_as("Haynes")
            .date_of_birth(born(1999, 3, 2))
            .city("Gulf")
            .country("Canada")
            .created(now - Duration::days(10))
            .last_active(now - Duration::hours(5))
            .photo(photo(6, "men/7"))
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use dating_core::PageRequest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn user(id: i64, gender: Gender, minutes_ago: i64) -> User {
        let now = Utc::now();
        UserBuilder::new(id, format!("user{id}"))
            .gender(gender)
            .created(now - Duration::days(id))
            .last_active(now - Duration::minutes(minutes_ago))
            .build()
    }

    fn repos(users: Vec<User>) -> (Arc<InMemoryStore>, InMemoryUserRepository, InMemoryLikeRepository) {
        let store = Arc::new(InMemoryStore::with_users(users));
        (
            Arc::clone(&store),
            InMemoryUserRepository::new(Arc::clone(&store)),
            InMemoryLikeRepository::new(store),
        )
    }

    fn ids(page: &Page<User>) -> Vec<i64> {
        page.content.iter().map(|u| u.id.into_inner()).collect()
    }

    #[tokio::test]
    async fn test_find_page_excludes_requester_and_filters_gender() {
        let (_, users, _) = repos(vec![
            user(1, Gender::Male, 0),
            user(2, Gender::Female, 5),
            user(3, Gender::Male, 1),
            user(4, Gender::Female, 2),
        ]);

        let mut params = UserParams::new(UserId::new(1));
        params.gender = Some(Gender::Female);

        let page = users.find_page(&params).await.unwrap();
        assert_eq!(ids(&page), vec![4, 2]);
        assert_eq!(page.info.total_count, 2);
    }

    #[tokio::test]
    async fn test_find_page_orders_by_created() {
        let (_, users, _) = repos(vec![
            user(1, Gender::Male, 0),
            user(2, Gender::Female, 50),
            user(3, Gender::Female, 1),
        ]);

        let mut params = UserParams::new(UserId::new(1));
        params.order_by = UserOrder::Created;

        let page = users.find_page(&params).await.unwrap();
        // user 2 was created one day after user 3
        assert_eq!(ids(&page), vec![2, 3]);
    }

    #[tokio::test]
    async fn test_find_page_paginates() {
        let mut all: Vec<User> = (1..=12).map(|id| user(id, Gender::Female, id)).collect();
        all.push(user(100, Gender::Male, 0));
        let (_, users, _) = repos(all);

        let mut params = UserParams::new(UserId::new(100));
        params.page = PageRequest::new(2, 5);

        let page = users.find_page(&params).await.unwrap();
        assert_eq!(ids(&page), vec![6, 7, 8, 9, 10]);
        assert_eq!(page.info.total_count, 12);
        assert_eq!(page.info.total_pages, 3);
    }

    #[tokio::test]
    async fn test_find_page_age_window() {
        let today = Utc::now().date_naive();
        let young = UserBuilder::new(2, "young")
            .gender(Gender::Female)
            .date_of_birth(today - Duration::days(365 * 20 + 30))
            .build();
        let old = UserBuilder::new(3, "old")
            .gender(Gender::Female)
            .date_of_birth(date(1950, 1, 1))
            .build();
        let (_, users, _) = repos(vec![user(1, Gender::Male, 0), young, old]);

        let mut params = UserParams::new(UserId::new(1));
        params.min_age = 18;
        params.max_age = 40;

        let page = users.find_page(&params).await.unwrap();
        assert_eq!(ids(&page), vec![2]);
    }

    #[tokio::test]
    async fn test_find_page_likers_and_likees() {
        let (_, users, likes) = repos(vec![
            user(1, Gender::Male, 0),
            user(2, Gender::Female, 1),
            user(3, Gender::Female, 2),
        ]);
        likes.insert_like(Like::new(UserId::new(2), UserId::new(1))).await.unwrap();
        likes.insert_like(Like::new(UserId::new(1), UserId::new(3))).await.unwrap();

        let mut params = UserParams::new(UserId::new(1));
        params.likers = true;
        assert_eq!(ids(&users.find_page(&params).await.unwrap()), vec![2]);

        params.likers = false;
        params.likees = true;
        assert_eq!(ids(&users.find_page(&params).await.unwrap()), vec![3]);
    }

    #[tokio::test]
    async fn test_insert_like_is_unique_per_pair() {
        let (store, _, likes) = repos(vec![]);
        let like = Like::new(UserId::new(5), UserId::new(9));

        assert!(likes.insert_like(like).await.unwrap());
        assert!(!likes.insert_like(like).await.unwrap());
        assert!(likes.insert_like(Like::new(UserId::new(9), UserId::new(5))).await.unwrap());
        assert_eq!(store.like_count(), 2);
        assert_eq!(likes.find_like(UserId::new(5), UserId::new(9)).await.unwrap(), Some(like));
    }

    #[tokio::test]
    async fn test_concurrent_likes_store_one_row() {
        let (store, _, likes) = repos(vec![]);
        let like = Like::new(UserId::new(5), UserId::new(9));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let likes = likes.clone();
                tokio::spawn(async move { likes.insert_like(like).await.unwrap() })
            })
            .collect();

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
        assert_eq!(store.like_count(), 1);
    }

    #[tokio::test]
    async fn test_update_and_touch() {
        let (store, users, _) = repos(vec![user(1, Gender::Male, 60)]);

        let mut changed = store.user(UserId::new(1)).unwrap();
        changed.city = "Oslo".to_string();
        changed.interests = Some("chess".to_string());
        users.update(&changed).await.unwrap();

        let now = Utc::now();
        users.touch_last_active(UserId::new(1), now).await.unwrap();

        let stored = store.user(UserId::new(1)).unwrap();
        assert_eq!(stored.city, "Oslo");
        assert_eq!(stored.interests.as_deref(), Some("chess"));
        assert_eq!(stored.last_active, now);
    }

    #[tokio::test]
    async fn test_health_check() {
        assert!(InMemoryStore::new().check().await.is_healthy());
    }

    #[test]
    fn test_demo_users_have_main_photos() {
        let users = demo_users();
        assert!(users.iter().all(|u| u.main_photo_url().is_some()));
        assert!(users.iter().any(|u| u.gender == Gender::Female));
        assert!(users.iter().any(|u| u.gender == Gender::Male));
    }
}
