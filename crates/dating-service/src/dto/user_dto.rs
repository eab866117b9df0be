//! User-related DTOs.

use chrono::{DateTime, Utc};
use dating_core::{Gender, PhotoId, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Member card shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserForListDto {
    pub id: UserId,
    pub username: String,
    pub gender: Gender,
    pub age: u32,
    pub known_as: String,
    pub created: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub city: String,
    pub country: String,
    /// Url of the main photo, if the member has one.
    pub photo_url: Option<String>,
}

/// Photo as shown on a member profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoForDetailedDto {
    pub id: PhotoId,
    pub url: String,
    pub description: Option<String>,
    pub date_added: DateTime<Utc>,
    pub is_main: bool,
}

/// Full member profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserForDetailedDto {
    pub id: UserId,
    pub username: String,
    pub gender: Gender,
    pub age: u32,
    pub known_as: String,
    pub created: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub introduction: Option<String>,
    pub looking_for: Option<String>,
    pub interests: Option<String>,
    pub city: String,
    pub country: String,
    pub photo_url: Option<String>,
    pub photos: Vec<PhotoForDetailedDto>,
}

/// Profile edit. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserForUpdateDto {
    #[validate(length(max = 2000, message = "Introduction cannot exceed 2000 characters"))]
    pub introduction: Option<String>,

    #[validate(length(max = 2000, message = "Looking for cannot exceed 2000 characters"))]
    pub looking_for: Option<String>,

    #[validate(length(max = 2000, message = "Interests cannot exceed 2000 characters"))]
    pub interests: Option<String>,

    #[validate(length(max = 64, message = "City cannot exceed 64 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 64, message = "Country cannot exceed 64 characters"))]
    pub country: Option<String>,
}
