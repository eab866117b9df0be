//! Integration tests for the MySQL repositories.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use chrono::{Duration, NaiveDate, Utc};
use dating_core::{Gender, Like, PageRequest, UserId, UserOrder, UserParams};
use dating_repository::{LikeRepository, MySqlLikeRepository, MySqlUserRepository, UserRepository};
use common::TestDatabase;

fn born(y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, 6, 1).unwrap()
}

#[tokio::test]
async fn test_find_by_id_loads_photos() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());
    let now = Utc::now();

    let id = db.seed_user("lola", Gender::Female, born(1992), now, now).await;
    db.seed_photo(id, "http://img/a.jpg", false).await;
    db.seed_photo(id, "http://img/b.jpg", true).await;

    let user = repo
        .find_by_id(UserId::new(id))
        .await
        .expect("Query failed")
        .expect("User not found");

    assert_eq!(user.username, "lola");
    assert_eq!(user.gender, Gender::Female);
    assert_eq!(user.photos.len(), 2);
    assert_eq!(user.main_photo_url().as_deref(), Some("http://img/b.jpg"));
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let result = repo.find_by_id(UserId::new(999)).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_page_filters_and_orders() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());
    let now = Utc::now();

    let me = db.seed_user("me", Gender::Male, born(1990), now, now).await;
    let anna = db
        .seed_user("anna", Gender::Female, born(1991), now - Duration::days(3), now - Duration::hours(1))
        .await;
    let bea = db
        .seed_user("bea", Gender::Female, born(1993), now - Duration::days(1), now - Duration::hours(5))
        .await;
    db.seed_user("carl", Gender::Male, born(1989), now, now).await;

    let mut params = UserParams::new(UserId::new(me));
    params.gender = Some(Gender::Female);

    let page = repo.find_page(&params).await.expect("Query failed");
    let ids: Vec<i64> = page.content.iter().map(|u| u.id.into_inner()).collect();
    assert_eq!(ids, vec![anna, bea]);
    assert_eq!(page.info.total_count, 2);

    params.order_by = UserOrder::Created;
    let page = repo.find_page(&params).await.expect("Query failed");
    let ids: Vec<i64> = page.content.iter().map(|u| u.id.into_inner()).collect();
    assert_eq!(ids, vec![bea, anna]);
}

#[tokio::test]
async fn test_find_page_age_window_and_paging() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());
    let now = Utc::now();

    let me = db.seed_user("me", Gender::Male, born(1990), now, now).await;
    for i in 0..7 {
        db.seed_user(&format!("young{i}"), Gender::Female, born(2000), now, now).await;
    }
    db.seed_user("senior", Gender::Female, born(1940), now, now).await;

    let mut params = UserParams::new(UserId::new(me));
    params.gender = Some(Gender::Female);
    params.max_age = 60;
    params.page = PageRequest::new(2, 5);

    let page = repo.find_page(&params).await.expect("Query failed");
    assert_eq!(page.info.total_count, 7);
    assert_eq!(page.info.total_pages, 2);
    assert_eq!(page.len(), 2);
    assert!(page.content.iter().all(|u| u.username.starts_with("young")));
}

#[tokio::test]
async fn test_like_uniqueness_and_likers_filter() {
    let db = TestDatabase::new().await;
    let users = MySqlUserRepository::new(db.pool());
    let likes = MySqlLikeRepository::new(db.pool());
    let now = Utc::now();

    let me = db.seed_user("me", Gender::Male, born(1990), now, now).await;
    let her = db.seed_user("her", Gender::Female, born(1992), now, now).await;
    let like = Like::new(UserId::new(her), UserId::new(me));

    assert!(likes.insert_like(like).await.expect("Insert failed"));
    assert!(!likes.insert_like(like).await.expect("Insert failed"));
    assert_eq!(
        likes.find_like(UserId::new(her), UserId::new(me)).await.expect("Query failed"),
        Some(like)
    );
    assert!(likes
        .find_like(UserId::new(me), UserId::new(her))
        .await
        .expect("Query failed")
        .is_none());

    let mut params = UserParams::new(UserId::new(me));
    params.likers = true;
    let page = users.find_page(&params).await.expect("Query failed");
    assert_eq!(page.len(), 1);
    assert_eq!(page.content[0].id, UserId::new(her));
}

#[tokio::test]
async fn test_like_unknown_likee_is_an_error() {
    let db = TestDatabase::new().await;
    let likes = MySqlLikeRepository::new(db.pool());
    let now = Utc::now();

    let me = db.seed_user("me", Gender::Male, born(1990), now, now).await;
    let result = likes.insert_like(Like::new(UserId::new(me), UserId::new(424_242))).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_update_and_touch_last_active() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());
    let then = Utc::now() - Duration::days(2);

    let id = db.seed_user("me", Gender::Male, born(1990), then, then).await;
    let mut user = repo.find_by_id(UserId::new(id)).await.unwrap().unwrap();
    user.introduction = Some("hello".to_string());
    user.city = "Bergen".to_string();

    repo.update(&user).await.expect("Update failed");
    // identical update still succeeds
    repo.update(&user).await.expect("Update failed");

    let now = Utc::now();
    repo.touch_last_active(UserId::new(id), now).await.expect("Touch failed");

    let stored = repo.find_by_id(UserId::new(id)).await.unwrap().unwrap();
    assert_eq!(stored.introduction.as_deref(), Some("hello"));
    assert_eq!(stored.city, "Bergen");
    assert!((stored.last_active - now).num_seconds().abs() <= 1);
}
