//! Scheduling calendar core for the creator content dashboard.
//!
//! Given a reference month and the list of scheduled posts, [`build_month_grid`]
//! produces the 6-week (42-cell) day grid the dashboard renders, with each
//! current-month cell annotated with that day's posts and a ranked list of
//! platform-specific optimal posting times.
//!
//! Everything here is pure and synchronous: no I/O, no hidden state, safe to
//! call from any number of rendering passes. Fetching posts, month-stepper
//! navigation state, and "today" highlighting all live in the consuming UI.

pub mod calendar;
pub mod errors;
pub mod models;

pub use calendar::grid::{build_month_grid, CalendarDay, GRID_CELLS};
pub use calendar::optimal_times::{optimal_times_for_date, DayKind, OptimalTime};
pub use errors::ScheduleError;
pub use models::post::{Platform, PostStatus, ScheduledPost};
