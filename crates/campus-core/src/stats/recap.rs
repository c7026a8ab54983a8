//! Yearly recap aggregation

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::entities::{Checkin, Comment, Post};

/// Number of tags reported in a recap.
pub const TOP_TAG_COUNT: usize = 5;

/// A tag and how many of the user's posts carried it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: u32,
}

/// Aggregate activity summary for one user over one calendar year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearStats {
    pub year: i32,
    pub posts_count: u32,
    pub comments_count: u32,
    pub checkins_count: u32,
    pub total_likes: i64,
    /// Top tags by frequency; ties keep first-encountered order.
    pub top_tags: Vec<TagCount>,
    /// Calendar month 0-11 with the most posts; ties resolve to the lowest
    /// month index. `None` when there were no posts.
    pub most_active_month: Option<u32>,
}

/// The UTC half-open window `[Jan 1 year, Jan 1 year+1)`.
#[must_use]
pub fn year_window(year: i32) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single();
    let end = Utc.with_ymd_and_hms(year + 1, 1, 1, 0, 0, 0).single();
    (
        start.unwrap_or_else(|| Utc.timestamp_millis_opt(0).unwrap()),
        end.unwrap_or_else(|| Utc.timestamp_millis_opt(0).unwrap()),
    )
}

/// Build the yearly recap from a user's posts, comments, and check-ins.
///
/// Inputs are the user's full histories; filtering to the year window
/// happens here so callers stay oblivious to the boundary rules.
#[must_use]
pub fn year_in_review(
    year: i32,
    posts: &[Post],
    comments: &[Comment],
    checkins: &[Checkin],
) -> YearStats {
    let (start, end) = year_window(year);
    let in_window = |at: DateTime<Utc>| at >= start && at < end;

    let posts: Vec<&Post> = posts.iter().filter(|p| in_window(p.created_at)).collect();
    let comments_count = comments.iter().filter(|c| in_window(c.created_at)).count() as u32;
    let checkins_count = checkins.iter().filter(|c| in_window(c.created_at)).count() as u32;

    let total_likes = posts.iter().map(|p| p.likes).sum();

    // Tag frequencies, preserving first-encountered order so the stable
    // sort below leaves ties in that order.
    let mut tag_counts: Vec<TagCount> = Vec::new();
    for post in &posts {
        for tag in &post.tags {
            match tag_counts.iter_mut().find(|tc| &tc.tag == tag) {
                Some(tc) => tc.count += 1,
                None => tag_counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                }),
            }
        }
    }
    tag_counts.sort_by(|a, b| b.count.cmp(&a.count));
    tag_counts.truncate(TOP_TAG_COUNT);

    let mut month_counts = [0u32; 12];
    for post in &posts {
        let month = post.created_at.date_naive().month0() as usize;
        month_counts[month] += 1;
    }
    // Lowest month index wins ties.
    let most_active_month = month_counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
        .map(|(month, _)| month as u32);

    YearStats {
        year,
        posts_count: posts.len() as u32,
        comments_count,
        checkins_count,
        total_likes,
        top_tags: tag_counts,
        most_active_month,
    }
}
