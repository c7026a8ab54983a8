//! Consecutive check-in streak calculation

use chrono::NaiveDate;

/// Count consecutive calendar days with a check-in, ending today.
///
/// `days` must be ordered newest-first (the order check-in histories are
/// stored in). The k-th most recent day must be exactly `today - k` to
/// extend the streak; the walk stops at the first gap. A history whose most
/// recent entry is not today yields 0.
#[must_use]
pub fn consecutive_day_streak(days: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut streak: u32 = 0;
    for day in days {
        let diff = (today - *day).num_days();
        if diff == i64::from(streak) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(consecutive_day_streak(&[], day(2024, 6, 10)), 0);
    }

    #[test]
    fn test_today_only() {
        let today = day(2024, 6, 10);
        assert_eq!(consecutive_day_streak(&[today], today), 1);
    }

    #[test]
    fn test_three_days_then_gap() {
        // Check-ins on T, T-1, T-2 and a gap at T-3: streak = 3.
        let today = day(2024, 6, 10);
        let days = [
            day(2024, 6, 10),
            day(2024, 6, 9),
            day(2024, 6, 8),
            day(2024, 6, 6),
        ];
        assert_eq!(consecutive_day_streak(&days, today), 3);
    }

    #[test]
    fn test_missed_today_breaks_streak() {
        // Long run ending yesterday counts for nothing today.
        let today = day(2024, 6, 10);
        let days = [day(2024, 6, 9), day(2024, 6, 8), day(2024, 6, 7)];
        assert_eq!(consecutive_day_streak(&days, today), 0);
    }

    #[test]
    fn test_today_but_not_yesterday() {
        let today = day(2024, 6, 10);
        let days = [day(2024, 6, 10), day(2024, 6, 8)];
        assert_eq!(consecutive_day_streak(&days, today), 1);
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let today = day(2024, 3, 1);
        let days = [day(2024, 3, 1), day(2024, 2, 29), day(2024, 2, 28)];
        assert_eq!(consecutive_day_streak(&days, today), 3);
    }

    #[test]
    fn test_future_day_breaks_immediately() {
        // A day after "today" produces a negative diff and stops the walk.
        let today = day(2024, 6, 10);
        let days = [day(2024, 6, 11), day(2024, 6, 10)];
        assert_eq!(consecutive_day_streak(&days, today), 0);
    }
}
