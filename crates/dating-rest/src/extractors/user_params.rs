//! Query parameters for the member listing.

use dating_core::{DatingResult, Gender, PageRequest, UserId, UserOrder, UserParams};
use serde::Deserialize;
use utoipa::IntoParams;

/// Raw query string of `GET /api/user`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct UserParamsQuery {
    /// Page number (1-indexed).
    pub page_number: Option<usize>,
    /// Number of members per page.
    pub page_size: Option<usize>,
    /// `male` or `female`; defaults to the opposite of the caller's.
    pub gender: Option<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    /// `created` or `lastActive`.
    pub order_by: Option<String>,
    /// Only members who liked the caller.
    #[serde(default)]
    pub likers: bool,
    /// Only members the caller liked.
    #[serde(default)]
    pub likees: bool,
}

impl UserParamsQuery {
    /// Resolves the query for the given caller.
    pub fn into_params(self, user_id: UserId) -> DatingResult<UserParams> {
        let mut params = UserParams::new(user_id);

        params.page = PageRequest::new(
            self.page_number.unwrap_or(1),
            self.page_size.unwrap_or(PageRequest::DEFAULT_SIZE),
        );
        params.gender = Gender::parse_optional(self.gender.as_deref())?;
        if let Some(min_age) = self.min_age {
            params.min_age = min_age;
        }
        if let Some(max_age) = self.max_age {
            params.max_age = max_age;
        }
        params.order_by = UserOrder::from_query(self.order_by.as_deref());
        params.likers = self.likers;
        params.likees = self.likees;

        Ok(params)
    }
}
