//! Entity-DTO mappers.

use crate::dto::{PhotoForDetailedDto, UserForDetailedDto, UserForListDto, UserForUpdateDto};
use chrono::{NaiveDate, Utc};
use dating_core::{Mapper, Photo, ProfileChanges, User};

/// Maps users to the shapes the API returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl UserMapper {
    /// Builds a listing card with the age as of `today`.
    #[must_use]
    pub fn list_dto_on(user: &User, today: NaiveDate) -> UserForListDto {
        UserForListDto {
            id: user.id,
            username: user.username.clone(),
            gender: user.gender,
            age: user.age_on(today),
            known_as: user.known_as.clone(),
            created: user.created,
            last_active: user.last_active,
            city: user.city.clone(),
            country: user.country.clone(),
            photo_url: user.main_photo_url(),
        }
    }

    /// Builds a full profile with the age as of `today`.
    #[must_use]
    pub fn detailed_dto_on(user: &User, today: NaiveDate) -> UserForDetailedDto {
        UserForDetailedDto {
            id: user.id,
            username: user.username.clone(),
            gender: user.gender,
            age: user.age_on(today),
            known_as: user.known_as.clone(),
            created: user.created,
            last_active: user.last_active,
            introduction: user.introduction.clone(),
            looking_for: user.looking_for.clone(),
            interests: user.interests.clone(),
            city: user.city.clone(),
            country: user.country.clone(),
            photo_url: user.main_photo_url(),
            photos: user.photos.iter().map(<Self as Mapper<&Photo, PhotoForDetailedDto>>::map).collect(),
        }
    }

    /// Copies the supplied profile fields onto the entity.
    pub fn apply_update(source: &UserForUpdateDto, target: &mut User) {
        target.update_profile(ProfileChanges {
            introduction: source.introduction.clone(),
            looking_for: source.looking_for.clone(),
            interests: source.interests.clone(),
            city: source.city.clone(),
            country: source.country.clone(),
        });
    }
}

impl Mapper<&User, UserForListDto> for UserMapper {
    fn map(from: &User) -> UserForListDto {
        Self::list_dto_on(from, Utc::now().date_naive())
    }
}

impl Mapper<&User, UserForDetailedDto> for UserMapper {
    fn map(from: &User) -> UserForDetailedDto {
        Self::detailed_dto_on(from, Utc::now().date_naive())
    }
}

impl Mapper<&Photo, PhotoForDetailedDto> for UserMapper {
    fn map(from: &Photo) -> PhotoForDetailedDto {
        PhotoForDetailedDto {
            id: from.id,
            url: from.url.clone(),
            description: from.description.clone(),
            date_added: from.date_added,
            is_main: from.is_main,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dating_core::{Gender, PhotoId, UserBuilder, UserId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_user() -> User {
        UserBuilder::new(9, "lola")
            .gender(Gender::Female)
            .known_as("Lola")
            .date_of_birth(date(1994, 8, 20))
            .city("Oslo")
            .country("Norway")
            .introduction("Hi there")
            .photo(Photo::new(PhotoId::new(1), "http://img/1.jpg", false))
            .photo(Photo::new(PhotoId::new(2), "http://img/2.jpg", true))
            .build()
    }

    #[test]
    fn test_list_dto() {
        let user = sample_user();
        let dto = UserMapper::list_dto_on(&user, date(2024, 8, 19));

        assert_eq!(dto.id, UserId::new(9));
        assert_eq!(dto.age, 29);
        assert_eq!(dto.known_as, "Lola");
        assert_eq!(dto.city, "Oslo");
        assert_eq!(dto.photo_url.as_deref(), Some("http://img/2.jpg"));
    }

    #[test]
    fn test_detailed_dto_includes_photos() {
        let user = sample_user();
        let dto = UserMapper::detailed_dto_on(&user, date(2024, 8, 20));

        assert_eq!(dto.age, 30);
        assert_eq!(dto.introduction.as_deref(), Some("Hi there"));
        assert_eq!(dto.photos.len(), 2);
        assert!(dto.photos[1].is_main);
        assert_eq!(dto.photo_url.as_deref(), Some("http://img/2.jpg"));
    }

    #[test]
    fn test_mapper_trait_uses_today() {
        let user = sample_user();
        let dto: UserForListDto = <UserMapper as Mapper<&User, UserForListDto>>::map(&user);
        assert_eq!(dto.age, user.age());
    }

    #[test]
    fn test_apply_update_keeps_omitted_fields() {
        let mut user = sample_user();
        let update = UserForUpdateDto {
            looking_for: Some("someone funny".to_string()),
            country: Some("Sweden".to_string()),
            ..UserForUpdateDto::default()
        };

        UserMapper::apply_update(&update, &mut user);

        assert_eq!(user.looking_for.as_deref(), Some("someone funny"));
        assert_eq!(user.country, "Sweden");
        assert_eq!(user.city, "Oslo");
        assert_eq!(user.introduction.as_deref(), Some("Hi there"));
    }
}
