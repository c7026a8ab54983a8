//! Demo data seeding
//!
//! Seeds the starter accounts and posts a fresh install ships with. Runs
//! only when none of the users/posts/comments keys exist yet.

use chrono::{Duration, Utc};
use tracing::info;

use campus_common::hash_password;

use crate::keys;
use crate::models::{CommentRecord, PostRecord, UserRecord};
use crate::store::{write_json, KeyValueStore, StoreError};

/// Password every seeded demo account starts with.
pub const DEMO_PASSWORD: &str = "123456";

/// Seeding errors
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Password hashing failed: {0}")]
    Hash(String),
}

/// Seed demo users, posts, and comments when the store is empty.
///
/// Returns `true` when data was written, `false` when the store already had
/// content under any of the three keys.
pub fn seed_demo_data_if_empty(store: &dyn KeyValueStore) -> Result<bool, SeedError> {
    let has_users = store.get(keys::USERS)?.is_some();
    let has_posts = store.get(keys::POSTS)?.is_some();
    let has_comments = store.get(keys::COMMENTS)?.is_some();
    if has_users && has_posts && has_comments {
        return Ok(false);
    }

    let hash = hash_password(DEMO_PASSWORD).map_err(|e| SeedError::Hash(e.to_string()))?;
    let now = Utc::now();
    let minutes_ago = |m: i64| (now - Duration::minutes(m)).timestamp_millis();

    let users = vec![
        UserRecord {
            id: "u_admin".to_string(),
            student_id: "admin".to_string(),
            password: hash.clone(),
            avatar: "https://api.dicebear.com/7.x/bottts-neutral/svg?seed=CampusAdmin"
                .to_string(),
            nickname: "Campus Admin".to_string(),
            bio: "Keeping the campus community tidy.".to_string(),
            tags: vec!["#admin".to_string(), "#community".to_string()],
            following: vec![],
            is_banned: false,
            role: "admin".to_string(),
            last_active_time: None,
        },
        UserRecord {
            id: "u_10001".to_string(),
            student_id: "20230001".to_string(),
            password: hash.clone(),
            avatar: "https://api.dicebear.com/7.x/initials/svg?seed=CL1".to_string(),
            nickname: "Library Cat".to_string(),
            bio: "Usually found in the reading room or the stacks.".to_string(),
            tags: vec![
                "#exams".to_string(),
                "#earlybird".to_string(),
                "#studynotes".to_string(),
            ],
            following: vec!["u_10002".to_string()],
            is_banned: false,
            role: "user".to_string(),
            last_active_time: None,
        },
        UserRecord {
            id: "u_10002".to_string(),
            student_id: "20230002".to_string(),
            password: hash,
            avatar: "https://api.dicebear.com/7.x/initials/svg?seed=CL2".to_string(),
            nickname: "Track Runner".to_string(),
            bio: "Three kilometers a day, join me for a night run.".to_string(),
            tags: vec![
                "#sports".to_string(),
                "#running".to_string(),
                "#healthy".to_string(),
            ],
            following: vec!["u_10001".to_string()],
            is_banned: false,
            role: "user".to_string(),
            last_active_time: None,
        },
    ];

    let posts = vec![
        PostRecord {
            id: "p_1".to_string(),
            author_id: "u_10001".to_string(),
            content: "Study hall until ten tonight. Anyone else cramming for finals? Happy to share my note-taking setup. #exams #studyhall".to_string(),
            images: vec![
                "https://images.pexels.com/photos/3747485/pexels-photo-3747485.jpeg".to_string(),
            ],
            likes: 8,
            timestamp: minutes_ago(120),
            tags: vec!["#exams".to_string(), "#studyhall".to_string()],
            visibility: "public".to_string(),
            group_id: None,
            reposted_from: None,
        },
        PostRecord {
            id: "p_2".to_string(),
            author_id: "u_10002".to_string(),
            content: "Three kilometers done on the track tonight. Windy, but the cooldown felt great. #sports #running".to_string(),
            images: vec![
                "https://images.pexels.com/photos/1401796/pexels-photo-1401796.jpeg".to_string(),
                "https://images.pexels.com/photos/1048039/pexels-photo-1048039.jpeg".to_string(),
            ],
            likes: 12,
            timestamp: minutes_ago(300),
            tags: vec!["#sports".to_string(), "#running".to_string()],
            visibility: "public".to_string(),
            group_id: None,
            reposted_from: None,
        },
        PostRecord {
            id: "p_3".to_string(),
            author_id: "u_10002".to_string(),
            content: "The new tea shop by the south gate has a huge queue, but the cheese foam is worth it. #food".to_string(),
            images: vec![
                "https://images.pexels.com/photos/4342956/pexels-photo-4342956.jpeg".to_string(),
            ],
            likes: 20,
            timestamp: minutes_ago(60 * 24),
            tags: vec!["#food".to_string()],
            visibility: "public".to_string(),
            group_id: None,
            reposted_from: None,
        },
        PostRecord {
            id: "p_4".to_string(),
            author_id: "u_10001".to_string(),
            content: "Finals week day 3: wrote lab reports all day, taking a walk around the track to reset. #finalsweek".to_string(),
            images: vec![],
            likes: 5,
            timestamp: minutes_ago(30),
            tags: vec!["#finalsweek".to_string()],
            visibility: "friends".to_string(),
            group_id: None,
            reposted_from: None,
        },
        PostRecord {
            id: "p_5".to_string(),
            author_id: "u_10001".to_string(),
            content: "Sharing my revision timetable. Grab a copy if it helps! #exams #studynotes".to_string(),
            images: vec![
                "https://images.pexels.com/photos/669615/pexels-photo-669615.jpeg".to_string(),
                "https://images.pexels.com/photos/167682/pexels-photo-167682.jpeg".to_string(),
            ],
            likes: 15,
            timestamp: minutes_ago(90),
            tags: vec!["#exams".to_string(), "#studynotes".to_string()],
            visibility: "public".to_string(),
            group_id: None,
            reposted_from: None,
        },
    ];

    let comments = vec![
        CommentRecord {
            id: "c_1".to_string(),
            post_id: "p_1".to_string(),
            user_id: "u_10002".to_string(),
            content: "I'm in the study hall tonight too, let's push through finals together!".to_string(),
            timestamp: minutes_ago(30),
        },
        CommentRecord {
            id: "c_2".to_string(),
            post_id: "p_2".to_string(),
            user_id: "u_10001".to_string(),
            content: "Inspiring! Take me along next time.".to_string(),
            timestamp: minutes_ago(45),
        },
        CommentRecord {
            id: "c_3".to_string(),
            post_id: "p_3".to_string(),
            user_id: "u_10001".to_string(),
            content: "Which shop is it? I need to try that.".to_string(),
            timestamp: minutes_ago(60 * 20),
        },
    ];

    write_json(store, keys::USERS, &users)?;
    write_json(store, keys::POSTS, &posts)?;
    write_json(store, keys::COMMENTS, &comments)?;

    info!(
        users = users.len(),
        posts = posts.len(),
        comments = comments.len(),
        "Seeded demo data"
    );
    Ok(true)
}
