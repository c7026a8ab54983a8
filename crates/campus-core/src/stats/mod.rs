//! Derived statistics over the campus data set
//!
//! Pure functions: callers fetch the records, these compute. This keeps the
//! calendar logic testable without a repository in sight.

mod recap;
mod streak;

pub use recap::{year_in_review, year_window, TagCount, YearStats, TOP_TAG_COUNT};
pub use streak::consecutive_day_streak;
