//! User entity.

use super::Photo;
use crate::domain::value_objects::Gender;
use crate::UserId;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered member of the dating site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// Unique login name.
    #[validate(length(min = 1, max = 32))]
    pub username: String,

    pub gender: Gender,

    pub date_of_birth: NaiveDate,

    /// Display name shown to other members.
    #[validate(length(max = 64))]
    pub known_as: String,

    /// Account creation timestamp.
    pub created: DateTime<Utc>,

    /// Last time the member made an authenticated request.
    pub last_active: DateTime<Utc>,

    pub introduction: Option<String>,
    pub looking_for: Option<String>,
    pub interests: Option<String>,

    #[validate(length(max = 64))]
    pub city: String,

    #[validate(length(max = 64))]
    pub country: String,

    pub photos: Vec<Photo>,
}

/// Profile fields a member may edit. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub introduction: Option<String>,
    pub looking_for: Option<String>,
    pub interests: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl User {
    /// Creates a user with an empty profile, created and active now.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>, gender: Gender, date_of_birth: NaiveDate) -> Self {
        let username = username.into();
        let now = Utc::now();
        Self {
            id,
            known_as: username.clone(),
            username,
            gender,
            date_of_birth,
            created: now,
            last_active: now,
            introduction: None,
            looking_for: None,
            interests: None,
            city: String::new(),
            country: String::new(),
            photos: Vec::new(),
        }
    }

    /// Age in whole years on the given day.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let dob = self.date_of_birth;
        let mut age = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        u32::try_from(age).unwrap_or(0)
    }

    /// Age in whole years today (UTC).
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age_on(Utc::now().date_naive())
    }

    /// The photo flagged as main, if any.
    #[must_use]
    pub fn main_photo(&self) -> Option<&Photo> {
        self.photos.iter().find(|p| p.is_main)
    }

    /// Url of the main photo, if any.
    #[must_use]
    pub fn main_photo_url(&self) -> Option<String> {
        self.main_photo().map(|p| p.url.clone())
    }

    /// Applies edited profile fields.
    pub fn update_profile(&mut self, changes: ProfileChanges) {
        if let Some(introduction) = changes.introduction {
            self.introduction = Some(introduction);
        }
        if let Some(looking_for) = changes.looking_for {
            self.looking_for = Some(looking_for);
        }
        if let Some(interests) = changes.interests {
            self.interests = Some(interests);
        }
        if let Some(city) = changes.city {
            self.city = city;
        }
        if let Some(country) = changes.country {
            self.country = country;
        }
    }

    /// Records activity at the given instant.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.last_active = at;
    }
}

/// Builder for creating User instances, mostly in tests and seeding.
#[derive(Debug)]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    /// Starts a builder for a male user born 1990-01-01.
    #[must_use]
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        let dob = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default();
        Self {
            user: User::new(UserId::new(id), username, Gender::Male, dob),
        }
    }

    #[must_use]
    pub fn gender(mut self, gender: Gender) -> Self {
        self.user.gender = gender;
        self
    }

    #[must_use]
    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.user.date_of_birth = date_of_birth;
        self
    }

    #[must_use]
    pub fn known_as(mut self, known_as: impl Into<String>) -> Self {
        self.user.known_as = known_as.into();
        self
    }

    #[must_use]
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.user.created = created;
        self
    }

    #[must_use]
    pub fn last_active(mut self, last_active: DateTime<Utc>) -> Self {
        self.user.last_active = last_active;
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.user.city = city.into();
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.user.country = country.into();
        self
    }

    #[must_use]
    pub fn introduction(mut self, introduction: impl Into<String>) -> Self {
        self.user.introduction = Some(introduction.into());
        self
    }

    /// Adds a photo owned by this user.
    #[must_use]
    pub fn photo(mut self, photo: Photo) -> Self {
        self.user.photos.push(Photo {
            user_id: self.user.id,
            ..photo
        });
        self
    }

    #[must_use]
    pub fn build(self) -> User {
        self.user
    }
}
