//! Month-grid construction for the scheduling calendar.
//!
//! The dashboard always renders a fixed 6x7 grid: the displayed month plus
//! leading/trailing days borrowed from the adjacent months. Months that fit in
//! five rows still get the sixth row as padding so the layout never reflows
//! when stepping between months.
//!
//! # Grid rules
//! - Exactly [`GRID_CELLS`] cells, chronological, Sunday-first.
//! - Current-month cells carry that day's posts (input order preserved) and
//!   the day's optimal posting times.
//! - Adjacent-month cells are rendered dimmed and are never annotated, even
//!   when a post genuinely falls on one of those dates.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::optimal_times::{optimal_times_for_date, OptimalTime};
use crate::errors::ScheduleError;
use crate::models::post::ScheduledPost;

/// 6 rows x 7 columns, fixed regardless of how many weeks the month spans.
pub const GRID_CELLS: usize = 42;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// One cell of the month grid. Recomputed on every build; has no identity of
/// its own and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub posts: Vec<ScheduledPost>,
    pub optimal_times: Vec<OptimalTime>,
}

// ────────────────────────────────────────────────────────────────────────────
// Grid builder
// ────────────────────────────────────────────────────────────────────────────

/// Builds the 42-cell grid for the month containing `reference`.
///
/// Only the year and month of `reference` matter; the day is ignored, so the
/// UI's month stepper can pass whatever date it is holding. `posts` need not
/// be sorted and may be empty. Pure and deterministic: identical inputs yield
/// structurally identical grids.
pub fn build_month_grid(reference: NaiveDate, posts: &[ScheduledPost]) -> Vec<CalendarDay> {
    let year = reference.year();
    let month = reference.month();
    let first = first_of_month(reference);

    // 0 = Sunday .. 6 = Saturday; also the number of leading cells.
    let starting_weekday = first.weekday().num_days_from_sunday() as i64;
    let grid_start = first - Duration::days(starting_weekday);

    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            if date.year() != year || date.month() != month {
                // Adjacent-month padding: dimmed in the UI, never annotated.
                return CalendarDay {
                    date,
                    is_current_month: false,
                    posts: Vec::new(),
                    optimal_times: Vec::new(),
                };
            }

            let day_posts = posts
                .iter()
                .filter(|post| {
                    post.scheduled_at
                        .map(|ts| ts.date() == date)
                        .unwrap_or(false)
                })
                .cloned()
                .collect();

            CalendarDay {
                date,
                is_current_month: true,
                posts: day_posts,
                optimal_times: optimal_times_for_date(date),
            }
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Calendar math helpers
// ────────────────────────────────────────────────────────────────────────────

/// Number of days in the given month, per the proleptic Gregorian calendar.
///
/// Panics if `month` is not 1-12 (a contract violation, not a data error).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("month must be 1-12")
        .pred_opt()
        .expect("every month has a predecessor day")
        .day()
}

/// First day of the month before the one containing `reference`. The month
/// stepper uses this as the previous reference date.
pub fn prev_month(reference: NaiveDate) -> NaiveDate {
    first_of_month(reference)
        .pred_opt()
        .expect("date is within chrono's supported range")
        .with_day(1)
        .expect("day 1 is valid in every month")
}

/// First day of the month after the one containing `reference`.
pub fn next_month(reference: NaiveDate) -> NaiveDate {
    let (year, month) = if reference.month() == 12 {
        (reference.year() + 1, 1)
    } else {
        (reference.year(), reference.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("day 1 is valid in every month")
}

/// Parses a `YYYY-MM` month selector (the shape the preview tool and the
/// dashboard's URL state use) into a reference date on day 1.
pub fn parse_month_selector(raw: &str) -> Result<NaiveDate, ScheduleError> {
    let invalid = || ScheduleError::InvalidMonth(raw.to_string());

    let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

fn first_of_month(reference: NaiveDate) -> NaiveDate {
    reference
        .with_day(1)
        .expect("day 1 is valid in every month")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
