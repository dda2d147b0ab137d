//! Race records returned by `GET /api/races`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format the backend uses for `Race::date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single race as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: i64,
    pub name: String,
    pub venue: String,
    pub date: String,
}

impl Race {
    /// Parse `date` as a calendar date, if the backend sent one in the usual format.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_list_deserialization() {
        let json = r#"[
            {"id": 1, "name": "ジャパンカップ", "venue": "東京", "date": "2023-11-26"},
            {"id": 2, "name": "有馬記念", "venue": "中山", "date": "2023-12-24"}
        ]"#;
        let races: Vec<Race> = serde_json::from_str(json).unwrap();
        assert_eq!(races.len(), 2);
        assert_eq!(races[0].name, "ジャパンカップ");
        assert_eq!(races[1].venue, "中山");
    }

    #[test]
    fn test_parsed_date() {
        let race = Race {
            id: 7,
            name: "安田記念".to_string(),
            venue: "東京".to_string(),
            date: "2024-06-02".to_string(),
        };
        assert_eq!(race.parsed_date(), NaiveDate::from_ymd_opt(2024, 6, 2));
    }

    #[test]
    fn test_parsed_date_unrecognized_format() {
        let race = Race {
            id: 7,
            name: "安田記念".to_string(),
            venue: "東京".to_string(),
            date: "June 2nd".to_string(),
        };
        assert!(race.parsed_date().is_none());
    }

    #[test]
    fn test_race_missing_field_rejected() {
        let json = r#"{"id": 1, "name": "x", "venue": "y"}"#;
        assert!(serde_json::from_str::<Race>(json).is_err());
    }
}
