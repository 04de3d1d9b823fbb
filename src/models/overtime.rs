//! Overtime entry model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of day overtime hours were worked on.
///
/// Qatar calls ordinary-day overtime "weekday", Saudi Arabia calls it
/// "regular"; both deserialize to [`OvertimeCategory::Regular`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeCategory {
    /// Overtime on an ordinary working day.
    #[serde(alias = "weekday")]
    Regular,
    /// Overtime on the weekly rest day.
    Weekend,
    /// Overtime on a public holiday.
    Holiday,
}

/// Overtime hours worked in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeEntry {
    /// The day category, which selects the rate multiplier.
    pub category: OvertimeCategory,
    /// Hours worked.
    pub hours: Decimal,
}

impl OvertimeEntry {
    /// Creates an overtime entry.
    pub fn new(category: OvertimeCategory, hours: Decimal) -> Self {
        Self { category, hours }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_alias_maps_to_regular() {
        let entry: OvertimeEntry =
            serde_json::from_str(r#"{"category": "weekday", "hours": "4"}"#).unwrap();
        assert_eq!(entry.category, OvertimeCategory::Regular);

        let entry: OvertimeEntry =
            serde_json::from_str(r#"{"category": "regular", "hours": "4"}"#).unwrap();
        assert_eq!(entry.category, OvertimeCategory::Regular);
    }

    #[test]
    fn test_category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OvertimeCategory::Holiday).unwrap(),
            "\"holiday\""
        );
    }
}
