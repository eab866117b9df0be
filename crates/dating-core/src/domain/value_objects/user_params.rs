//! Query parameters for browsing members.

use super::Gender;
use crate::{PageRequest, UserId};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Sort order for member listings. Newest first in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserOrder {
    #[default]
    LastActive,
    Created,
}

impl UserOrder {
    /// Interprets the `orderBy` query value. Anything but `created` sorts by
    /// last activity.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "created" => Self::Created,
            _ => Self::LastActive,
        }
    }
}

/// Per-request query configuration for the member listing.
///
/// Built fresh for every request and never persisted. `user_id` always
/// comes from the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserParams {
    pub page: PageRequest,
    pub user_id: UserId,
    pub gender: Option<Gender>,
    pub min_age: u32,
    pub max_age: u32,
    pub order_by: UserOrder,
    pub likers: bool,
    pub likees: bool,
}

impl UserParams {
    pub const DEFAULT_MIN_AGE: u32 = 18;
    pub const DEFAULT_MAX_AGE: u32 = 99;

    /// Default listing parameters for the given caller.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            page: PageRequest::default(),
            user_id,
            gender: None,
            min_age: Self::DEFAULT_MIN_AGE,
            max_age: Self::DEFAULT_MAX_AGE,
            order_by: UserOrder::default(),
            likers: false,
            likees: false,
        }
    }

    /// Whether the caller narrowed the default age window.
    #[must_use]
    pub const fn has_age_filter(&self) -> bool {
        self.min_age != Self::DEFAULT_MIN_AGE || self.max_age != Self::DEFAULT_MAX_AGE
    }

    /// Inclusive date-of-birth bounds matching `[min_age, max_age]` on `today`.
    #[must_use]
    pub fn date_of_birth_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let years_back = |years: u32| {
            today
                .checked_sub_months(Months::new(years.saturating_mul(12)))
                .unwrap_or(NaiveDate::MIN)
        };
        let earliest = years_back(self.max_age.saturating_add(1))
            .succ_opt()
            .unwrap_or(NaiveDate::MIN);
        let latest = years_back(self.min_age);
        (earliest, latest)
    }

    /// Whether a member born on `date_of_birth` passes the age filter.
    #[must_use]
    pub fn admits_birth_date(&self, date_of_birth: NaiveDate, today: NaiveDate) -> bool {
        if !self.has_age_filter() {
            return true;
        }
        let (earliest, latest) = self.date_of_birth_range(today);
        date_of_birth >= earliest && date_of_birth <= latest
    }
}
