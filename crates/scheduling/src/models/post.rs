//! Wire model for scheduled posts.
//!
//! Posts are created by the publishing workflow and arrive as JSON from the
//! dashboard's REST backend. This module only mirrors that schema; the grid
//! builder treats the resulting list as immutable input.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::errors::ScheduleError;

/// Target platforms the dashboard can publish to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    YouTube,
    Instagram,
    Facebook,
    LinkedIn,
    Twitter,
}

/// Lifecycle state of a scheduled post, owned by the publishing workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Scheduled,
    Published,
    Failed,
    Pending,
}

/// A piece of content queued for one or more platforms.
///
/// `scheduled_at` is timezone-naive, matching the backend schema. A post whose
/// timestamp is missing or unparseable deserializes with `scheduled_at = None`
/// and simply never matches any calendar day; one malformed record must not
/// prevent the rest of the calendar from rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPost {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub platforms: Vec<Platform>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub scheduled_at: Option<NaiveDateTime>,
    pub status: PostStatus,
    pub engagement_score: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
}

/// Parses a JSON array of posts, e.g. the body of the backend's
/// `GET /content/scheduled` response.
pub fn posts_from_json(raw: &str) -> Result<Vec<ScheduledPost>, ScheduleError> {
    Ok(serde_json::from_str(raw)?)
}

/// Accepted timestamp shapes, most specific first. The backend emits the first
/// form; the others show up in older exports.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_scheduled_at))
}

fn parse_scheduled_at(raw: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts);
        }
    }
    // Date-only timestamps count as midnight.
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    tracing::debug!("Unparseable scheduled_at {raw:?}: post will not appear on any day");
    None
}
