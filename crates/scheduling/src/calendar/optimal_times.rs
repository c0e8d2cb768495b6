//! Optimal posting times, keyed by weekday vs. weekend.
//!
//! This is a static lookup, not a model: no personalization, no history, no
//! use of past post performance. The exact platform/time/score/audience/reason
//! tuples are an observable contract; the dashboard's snapshot tests and
//! "Pro Tip" copy depend on these literal values, so treat any edit here as a
//! product change.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::post::Platform;

/// The one discriminant the lookup cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl DayKind {
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayKind::Weekend,
            _ => DayKind::Weekday,
        }
    }
}

/// A recommended posting slot for one platform on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalTime {
    pub platform: Platform,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// Relative engagement multiplier, higher is better.
    pub score: f64,
    /// Audience segment the slot targets, e.g. "18-34".
    pub audience: String,
    pub reason: String,
}

/// Returns the ranked posting slots for `date`: 5 entries on weekdays,
/// 3 on weekends.
pub fn optimal_times_for_date(date: NaiveDate) -> Vec<OptimalTime> {
    match DayKind::of(date) {
        DayKind::Weekend => weekend_slots(),
        DayKind::Weekday => weekday_slots(),
    }
}

fn weekend_slots() -> Vec<OptimalTime> {
    vec![
        slot(
            Platform::YouTube,
            10,
            1.2,
            "18-34",
            "Relaxed weekend mornings favor long-form video",
        ),
        slot(
            Platform::Instagram,
            11,
            1.4,
            "18-34",
            "Late-morning browsing peaks on weekends",
        ),
        slot(
            Platform::Facebook,
            14,
            1.1,
            "25-54",
            "Weekend afternoons see steady family-feed activity",
        ),
    ]
}

fn weekday_slots() -> Vec<OptimalTime> {
    vec![
        slot(
            Platform::LinkedIn,
            8,
            1.3,
            "25-54",
            "Professionals check feeds before the workday starts",
        ),
        slot(
            Platform::Twitter,
            12,
            1.4,
            "18-49",
            "Lunchtime scrolling drives the midday spike",
        ),
        slot(
            Platform::YouTube,
            15,
            1.3,
            "18-34",
            "Afternoon-break viewing lifts watch time",
        ),
        slot(
            Platform::Instagram,
            17,
            1.4,
            "18-34",
            "Commute hours are the strongest engagement window",
        ),
        slot(
            Platform::Facebook,
            19,
            1.2,
            "25-54",
            "Evening prime time reaches the broadest audience",
        ),
    ]
}

fn slot(platform: Platform, hour: u32, score: f64, audience: &str, reason: &str) -> OptimalTime {
    OptimalTime {
        platform,
        time: NaiveTime::from_hms_opt(hour, 0, 0).expect("slot hours are 0-23"),
        score,
        audience: audience.to_string(),
        reason: reason.to_string(),
    }
}

/// Serializes slot times as "HH:MM", the shape the dashboard displays.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_saturday_and_sunday_are_weekend() {
        assert_eq!(DayKind::of(date(2025, 6, 28)), DayKind::Weekend); // Saturday
        assert_eq!(DayKind::of(date(2025, 6, 29)), DayKind::Weekend); // Sunday
        assert_eq!(DayKind::of(date(2025, 6, 30)), DayKind::Weekday); // Monday
        assert_eq!(DayKind::of(date(2025, 6, 27)), DayKind::Weekday); // Friday
    }

    #[test]
    fn test_weekend_returns_exactly_three_entries() {
        let slots = optimal_times_for_date(date(2025, 6, 28));
        assert_eq!(slots.len(), 3);
        let platforms: Vec<Platform> = slots.iter().map(|s| s.platform).collect();
        assert_eq!(
            platforms,
            vec![Platform::YouTube, Platform::Instagram, Platform::Facebook]
        );
    }

    #[test]
    fn test_weekday_returns_exactly_five_entries() {
        let slots = optimal_times_for_date(date(2025, 6, 30));
        assert_eq!(slots.len(), 5);
        let platforms: Vec<Platform> = slots.iter().map(|s| s.platform).collect();
        assert_eq!(
            platforms,
            vec![
                Platform::LinkedIn,
                Platform::Twitter,
                Platform::YouTube,
                Platform::Instagram,
                Platform::Facebook
            ]
        );
    }

    #[test]
    fn test_weekend_literal_tuples() {
        let slots = optimal_times_for_date(date(2025, 6, 28));
        assert_eq!(slots[0].time.format("%H:%M").to_string(), "10:00");
        assert_eq!(slots[0].score, 1.2);
        assert_eq!(slots[0].audience, "18-34");
        // The concrete contract the dashboard's snapshot tests pin down.
        assert_eq!(slots[1].platform, Platform::Instagram);
        assert_eq!(slots[1].time.format("%H:%M").to_string(), "11:00");
        assert_eq!(slots[1].score, 1.4);
        assert_eq!(slots[2].time.format("%H:%M").to_string(), "14:00");
        assert_eq!(slots[2].score, 1.1);
        assert_eq!(slots[2].audience, "25-54");
    }

    #[test]
    fn test_weekday_literal_tuples() {
        let slots = optimal_times_for_date(date(2025, 7, 1));
        let expected: Vec<(&str, f64)> = vec![
            ("08:00", 1.3),
            ("12:00", 1.4),
            ("15:00", 1.3),
            ("17:00", 1.4),
            ("19:00", 1.2),
        ];
        for (slot, (time, score)) in slots.iter().zip(expected) {
            assert_eq!(slot.time.format("%H:%M").to_string(), time);
            assert_eq!(slot.score, score);
            assert!(!slot.reason.is_empty());
        }
    }

    #[test]
    fn test_time_serializes_as_hhmm() {
        let slots = optimal_times_for_date(date(2025, 6, 28));
        let value = serde_json::to_value(&slots[1]).unwrap();
        assert_eq!(value["time"], serde_json::json!("11:00"));
        assert_eq!(value["platform"], serde_json::json!("instagram"));
    }

    #[test]
    fn test_slot_round_trips_through_json() {
        let original = optimal_times_for_date(date(2025, 7, 1));
        let raw = serde_json::to_string(&original).unwrap();
        let back: Vec<OptimalTime> = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, original);
    }
}
