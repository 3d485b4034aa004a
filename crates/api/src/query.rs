//! Shared query parameter types for API handlers.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

/// Upper bound (and default) for list endpoints that take `?limit=`.
pub const MAX_LIST_LIMIT: i64 = 50;

/// `?date=YYYY-MM-DD` for endpoints that evaluate "today".
///
/// Defaults to the current UTC date so clients in any timezone can pin the
/// day they are looking at.
#[derive(Debug, Default, Deserialize)]
pub struct DateParams {
    pub date: Option<NaiveDate>,
}

impl DateParams {
    pub fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// `?limit=` for newest-first history lists.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

impl LimitParams {
    /// Clamp to `1..=MAX_LIST_LIMIT`, defaulting to the maximum.
    pub fn clamped(&self) -> i64 {
        self.limit.unwrap_or(MAX_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped() {
        assert_eq!(LimitParams { limit: None }.clamped(), 50);
        assert_eq!(LimitParams { limit: Some(0) }.clamped(), 1);
        assert_eq!(LimitParams { limit: Some(500) }.clamped(), 50);
        assert_eq!(LimitParams { limit: Some(7) }.clamped(), 7);
    }

    #[test]
    fn explicit_date_wins() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(DateParams { date: Some(date) }.today(), date);
    }
}
