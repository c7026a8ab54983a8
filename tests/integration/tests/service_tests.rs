//! Service integration tests
//!
//! Exercise the full service stack over the in-memory store.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use chrono::{Datelike, TimeZone, Utc};

use campus_core::entities::Checkin;
use campus_core::value_objects::RecordId;
use campus_service::dto::{
    CheckinRequest, CompleteRegistrationRequest, CreateCommentRequest, CreatePostRequest,
    FeedQuery, FeedTab, RepostRequest, UpdatePostRequest, UpdateProfileRequest,
};
use campus_service::services::{
    AdminService, AuthService, CheckinService, CommentService, FavoriteService, GroupService,
    PostService, RecapService, RepostService, UserService,
};
use integration_tests::{
    backdate_checkin, backdate_comment, backdate_post, complete_registration_request,
    login_request, post_request, register_user, seeded_context, test_context,
    unique_group_request, unique_register_request,
};

// ============================================================================
// Registration & Login
// ============================================================================

#[tokio::test]
async fn test_two_step_registration_auto_logs_in() {
    let ctx = test_context();
    let auth = AuthService::new(&ctx);

    let register = unique_register_request();
    auth.register_basic(register.clone()).await.unwrap();

    // Step one parks the data without creating the account
    assert!(auth.current_user().await.unwrap().is_none());

    let user = auth
        .complete_registration(complete_registration_request())
        .await
        .unwrap();
    assert_eq!(user.student_id, register.student_id);
    assert_eq!(user.tags.len(), 3);

    let current = auth.current_user().await.unwrap().unwrap();
    assert_eq!(current.id.to_string(), user.id);
}

#[tokio::test]
async fn test_duplicate_student_id_is_rejected() {
    let ctx = test_context();
    let auth = AuthService::new(&ctx);

    let register = unique_register_request();
    auth.register_basic(register.clone()).await.unwrap();
    auth.complete_registration(complete_registration_request())
        .await
        .unwrap();

    let err = auth.register_basic(register).await.unwrap_err();
    assert_eq!(err.error_code(), "STUDENT_ID_TAKEN");
}

#[tokio::test]
async fn test_register_basic_validation_rules() {
    let ctx = test_context();
    let auth = AuthService::new(&ctx);

    let mut non_numeric = unique_register_request();
    non_numeric.student_id = "abc123".to_string();
    let err = auth.register_basic(non_numeric).await.unwrap_err();
    assert_eq!(err.error_code(), "INVALID_STUDENT_ID");

    let mut short_password = unique_register_request();
    short_password.password = "12345".to_string();
    short_password.confirm_password = "12345".to_string();
    let err = auth.register_basic(short_password).await.unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");

    let mut mismatch = unique_register_request();
    mismatch.confirm_password = "654321".to_string();
    let err = auth.register_basic(mismatch).await.unwrap_err();
    assert_eq!(err.error_code(), "PASSWORD_MISMATCH");
}

#[tokio::test]
async fn test_complete_registration_requires_three_tags() {
    let ctx = test_context();
    let auth = AuthService::new(&ctx);

    auth.register_basic(unique_register_request()).await.unwrap();

    let err = auth
        .complete_registration(CompleteRegistrationRequest {
            tags: vec!["#one".to_string(), "#two".to_string()],
            avatar: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "TOO_FEW_TAGS");

    // Still pending, so a proper step two succeeds afterwards
    auth.complete_registration(complete_registration_request())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_complete_registration_without_pending_fails() {
    let ctx = test_context();
    let auth = AuthService::new(&ctx);

    let err = auth
        .complete_registration(complete_registration_request())
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NO_PENDING_REGISTRATION");
}

#[tokio::test]
async fn test_login_rejects_wrong_password_and_unknown_id() {
    let ctx = test_context();
    let auth = AuthService::new(&ctx);

    let register = unique_register_request();
    auth.register_basic(register.clone()).await.unwrap();
    auth.complete_registration(complete_registration_request())
        .await
        .unwrap();
    auth.logout().await.unwrap();

    let mut wrong = login_request(&register, false);
    wrong.password = "not-the-password".to_string();
    let err = auth.login(wrong).await.unwrap_err();
    assert_eq!(err.error_code(), "INVALID_CREDENTIALS");

    let mut unknown = login_request(&register, false);
    unknown.student_id = "99999999".to_string();
    let err = auth.login(unknown).await.unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");

    assert!(!auth.is_logged_in().await.unwrap());
}

#[tokio::test]
async fn test_remember_me_roundtrip() {
    let ctx = test_context();
    let auth = AuthService::new(&ctx);

    let register = unique_register_request();
    auth.register_basic(register.clone()).await.unwrap();
    auth.complete_registration(complete_registration_request())
        .await
        .unwrap();
    auth.logout().await.unwrap();

    auth.login(login_request(&register, true)).await.unwrap();
    assert_eq!(
        auth.remembered_student_id().await.unwrap().as_deref(),
        Some(register.student_id.as_str())
    );

    // Logging in without remember-me clears the stored id
    auth.login(login_request(&register, false)).await.unwrap();
    assert_eq!(auth.remembered_student_id().await.unwrap(), None);
}

#[tokio::test]
async fn test_banned_user_cannot_login() {
    let ctx = seeded_context();
    let auth = AuthService::new(&ctx);
    let admin = RecordId::new("u_admin");
    let target = RecordId::new("u_10001");

    AdminService::new(&ctx)
        .set_banned(&admin, &target, true)
        .await
        .unwrap();

    let err = auth
        .login(campus_service::dto::LoginRequest {
            student_id: "20230001".to_string(),
            password: campus_store::DEMO_PASSWORD.to_string(),
            remember_me: false,
        })
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "USER_BANNED");

    // Unbanning restores access
    AdminService::new(&ctx)
        .set_banned(&admin, &target, false)
        .await
        .unwrap();
    auth.login(campus_service::dto::LoginRequest {
        student_id: "20230001".to_string(),
        password: campus_store::DEMO_PASSWORD.to_string(),
        remember_me: false,
    })
    .await
    .unwrap();
}

// ============================================================================
// Posts
// ============================================================================

#[tokio::test]
async fn test_publish_extracts_tags_capped_at_five() {
    let ctx = test_context();
    let user = register_user(&ctx).await;
    let author = RecordId::new(user.id);

    let post = PostService::new(&ctx)
        .create_post(
            &author,
            post_request("so much to tag #a #b #c #d #e #f"),
        )
        .await
        .unwrap();
    assert_eq!(post.tags, vec!["#a", "#b", "#c", "#d", "#e"]);
    assert_eq!(post.visibility, "public");
}

#[tokio::test]
async fn test_delete_post_cascades_to_its_comments_only() {
    let ctx = test_context();
    let user = register_user(&ctx).await;
    let author = RecordId::new(user.id);
    let posts = PostService::new(&ctx);
    let comments = CommentService::new(&ctx);

    let doomed = posts
        .create_post(&author, post_request("going away"))
        .await
        .unwrap();
    let doomed_id = RecordId::new(doomed.id);
    let kept = posts
        .create_post(&author, post_request("staying"))
        .await
        .unwrap();
    let kept_id = RecordId::new(kept.id);

    for _ in 0..2 {
        comments
            .add_comment(
                &author,
                &doomed_id,
                CreateCommentRequest {
                    content: "on the doomed post".to_string(),
                },
            )
            .await
            .unwrap();
    }
    comments
        .add_comment(
            &author,
            &kept_id,
            CreateCommentRequest {
                content: "on the kept post".to_string(),
            },
        )
        .await
        .unwrap();

    posts.delete_post(&author, &doomed_id).await.unwrap();

    assert!(comments.comments_for_post(&doomed_id).await.unwrap().is_empty());
    assert_eq!(comments.comments_for_post(&kept_id).await.unwrap().len(), 1);
    assert_eq!(
        posts.get_post(&doomed_id).await.unwrap_err().error_code(),
        "NOT_FOUND"
    );
}

#[tokio::test]
async fn test_only_author_or_admin_deletes_a_post() {
    let ctx = seeded_context();
    let stranger = register_user(&ctx).await;
    let stranger_id = RecordId::new(stranger.id);
    let posts = PostService::new(&ctx);

    let seeded_post = RecordId::new("p_1");
    let err = posts
        .delete_post(&stranger_id, &seeded_post)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_POST_AUTHOR");

    // The seeded admin may force it through the admin service
    AdminService::new(&ctx)
        .force_delete_post(&RecordId::new("u_admin"), &seeded_post)
        .await
        .unwrap();
    assert_eq!(
        posts.get_post(&seeded_post).await.unwrap_err().error_code(),
        "NOT_FOUND"
    );
}

#[tokio::test]
async fn test_likes_never_drop_below_zero() {
    let ctx = test_context();
    let user = register_user(&ctx).await;
    let author = RecordId::new(user.id);
    let posts = PostService::new(&ctx);

    let post = posts
        .create_post(&author, post_request("like me"))
        .await
        .unwrap();
    let post_id = RecordId::new(post.id);

    assert_eq!(posts.like(&post_id).await.unwrap().likes, 1);
    assert_eq!(posts.retract_like(&post_id).await.unwrap().likes, 0);
    assert_eq!(posts.retract_like(&post_id).await.unwrap().likes, 0);
}

#[tokio::test]
async fn test_post_edit_rederives_tags_and_checks_author() {
    let ctx = test_context();
    let author_resp = register_user(&ctx).await;
    let author = RecordId::new(author_resp.id);
    let other_resp = register_user(&ctx).await;
    let other = RecordId::new(other_resp.id);
    let posts = PostService::new(&ctx);

    let post = posts
        .create_post(&author, post_request("about #cats"))
        .await
        .unwrap();
    let post_id = RecordId::new(post.id);

    let edited = posts
        .edit_post(
            &author,
            &post_id,
            UpdatePostRequest {
                content: Some("now about #dogs".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.tags, vec!["#dogs"]);

    let err = posts
        .edit_post(
            &other,
            &post_id,
            UpdatePostRequest {
                content: Some("hijack".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_POST_AUTHOR");
}

#[tokio::test]
async fn test_feed_tabs_and_keyword() {
    let ctx = test_context();
    let alice = RecordId::new(register_user(&ctx).await.id);
    let bob = RecordId::new(register_user(&ctx).await.id);
    let posts = PostService::new(&ctx);
    let users = UserService::new(&ctx);

    posts
        .create_post(&alice, post_request("public note about #exams"))
        .await
        .unwrap();
    posts
        .create_post(
            &alice,
            CreatePostRequest {
                content: "friends only".to_string(),
                images: Vec::new(),
                visibility: Some("friends".to_string()),
                group_id: None,
            },
        )
        .await
        .unwrap();

    // Recommended shows public posts only
    let feed = posts
        .feed(Some(&bob), &FeedQuery::default())
        .await
        .unwrap();
    assert_eq!(feed.len(), 1);
    assert!(feed[0].content.contains("public note"));

    // Following is empty until bob follows alice, then shows all her posts
    let following = FeedQuery {
        tab: FeedTab::Following,
        keyword: None,
    };
    assert!(posts.feed(Some(&bob), &following).await.unwrap().is_empty());
    users.follow(&bob, &alice).await.unwrap();
    assert_eq!(posts.feed(Some(&bob), &following).await.unwrap().len(), 2);

    // Logged out, the following tab shows nothing
    assert!(posts.feed(None, &following).await.unwrap().is_empty());

    // Keyword matches tags as well as content
    let keyword = FeedQuery {
        tab: FeedTab::Recommended,
        keyword: Some("#exams".to_string()),
    };
    assert_eq!(posts.feed(None, &keyword).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_group_posts_stay_out_of_the_feed() {
    let ctx = test_context();
    let user = RecordId::new(register_user(&ctx).await.id);
    let posts = PostService::new(&ctx);

    let group = GroupService::new(&ctx)
        .create_group(&user, unique_group_request())
        .await
        .unwrap();

    posts
        .create_post(
            &user,
            CreatePostRequest {
                content: "inside the group".to_string(),
                images: Vec::new(),
                visibility: None,
                group_id: Some(group.id.clone()),
            },
        )
        .await
        .unwrap();

    assert!(posts
        .feed(Some(&user), &FeedQuery::default())
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        posts
            .group_posts(&RecordId::new(group.id))
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_posting_into_a_foreign_group_fails() {
    let ctx = test_context();
    let owner = RecordId::new(register_user(&ctx).await.id);
    let outsider = RecordId::new(register_user(&ctx).await.id);

    let group = GroupService::new(&ctx)
        .create_group(&owner, unique_group_request())
        .await
        .unwrap();

    let err = PostService::new(&ctx)
        .create_post(
            &outsider,
            CreatePostRequest {
                content: "sneaking in".to_string(),
                images: Vec::new(),
                visibility: None,
                group_id: Some(group.id),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_GROUP_MEMBER");
}

// ============================================================================
// Favorites & Reposts
// ============================================================================

#[tokio::test]
async fn test_favorite_toggle_twice_restores_original_state() {
    let ctx = test_context();
    let user = RecordId::new(register_user(&ctx).await.id);
    let post = PostService::new(&ctx)
        .create_post(&user, post_request("keep this one"))
        .await
        .unwrap();
    let post_id = RecordId::new(post.id);
    let favorites = FavoriteService::new(&ctx);

    assert!(!favorites.is_favorite(&user, &post_id).await.unwrap());

    assert!(favorites.toggle(&user, &post_id).await.unwrap());
    assert!(favorites.is_favorite(&user, &post_id).await.unwrap());
    assert_eq!(favorites.favorite_posts(&user).await.unwrap().len(), 1);

    assert!(!favorites.toggle(&user, &post_id).await.unwrap());
    assert!(!favorites.is_favorite(&user, &post_id).await.unwrap());
    assert!(favorites.favorite_posts(&user).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_repost_creates_link_and_derived_post() {
    let ctx = test_context();
    let author = RecordId::new(register_user(&ctx).await.id);
    let reposter = RecordId::new(register_user(&ctx).await.id);
    let posts = PostService::new(&ctx);
    let reposts = RepostService::new(&ctx);

    let original = posts
        .create_post(&author, post_request("worth sharing"))
        .await
        .unwrap();
    let original_id = RecordId::new(original.id);

    let result = reposts
        .repost(
            &reposter,
            &original_id,
            RepostRequest {
                commentary: Some("must read".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(result.post.repost_of.as_deref(), Some(original_id.as_str()));
    assert_eq!(result.post.content, "must read");
    assert!(result.post.tags.is_empty());

    assert_eq!(reposts.repost_count(&original_id).await.unwrap(), 1);

    // Reposting something that does not exist fails
    let err = reposts
        .repost(&reposter, &RecordId::new("p_missing"), RepostRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
}

// ============================================================================
// Check-ins & Streaks
// ============================================================================

#[tokio::test]
async fn test_second_checkin_same_day_is_rejected() {
    let ctx = test_context();
    let user = RecordId::new(register_user(&ctx).await.id);
    let checkins = CheckinService::new(&ctx);

    assert!(!checkins.has_checked_in_today(&user).await.unwrap());

    let result = checkins
        .check_in(
            &user,
            CheckinRequest {
                note: Some("morning run".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(result.streak, 1);
    assert_eq!(result.checkin.note.as_deref(), Some("morning run"));

    assert!(checkins.has_checked_in_today(&user).await.unwrap());
    let err = checkins
        .check_in(&user, CheckinRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "ALREADY_CHECKED_IN");
}

#[tokio::test]
async fn test_streak_counts_consecutive_days_until_gap() {
    let ctx = test_context();
    let user = RecordId::new(register_user(&ctx).await.id);
    let checkins = CheckinService::new(&ctx);

    // History: T-1, T-2, then a gap (T-3 missing), then T-4
    backdate_checkin(&ctx, &user, 1).await;
    backdate_checkin(&ctx, &user, 2).await;
    backdate_checkin(&ctx, &user, 4).await;

    // Checking in today extends the run to T, T-1, T-2
    let result = checkins
        .check_in(&user, CheckinRequest::default())
        .await
        .unwrap();
    assert_eq!(result.streak, 3);
    assert_eq!(checkins.streak(&user).await.unwrap(), 3);

    let summary = checkins.summary(&user).await.unwrap();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.streak, 3);
    assert!(summary.last_checkin_at.is_some());
}

#[tokio::test]
async fn test_streak_is_zero_without_a_checkin_today() {
    let ctx = test_context();
    let user = RecordId::new(register_user(&ctx).await.id);

    backdate_checkin(&ctx, &user, 1).await;
    backdate_checkin(&ctx, &user, 2).await;

    assert_eq!(CheckinService::new(&ctx).streak(&user).await.unwrap(), 0);
}

// ============================================================================
// Yearly Recap
// ============================================================================

#[tokio::test]
async fn test_recap_counts_respect_the_year_window() {
    let ctx = test_context();
    let user = RecordId::new(register_user(&ctx).await.id);

    let at = |y: i32, m: u32, d: u32, h: u32| Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();

    // Two posts inside 2020, one on each boundary side outside it
    backdate_post(&ctx, &user, "first of the year #hello", at(2020, 1, 1, 0)).await;
    let in_year = backdate_post(&ctx, &user, "end of year #hello", at(2020, 12, 31, 23)).await;
    backdate_post(&ctx, &user, "old news", at(2019, 12, 31, 23)).await;
    backdate_post(&ctx, &user, "new years day", at(2021, 1, 1, 0)).await;

    backdate_comment(&ctx, &user, &in_year, at(2020, 6, 1, 12)).await;
    backdate_comment(&ctx, &user, &in_year, at(2021, 6, 1, 12)).await;

    let mut checkin = Checkin::new(RecordId::new("ch_recap"), user.clone(), None);
    checkin.created_at = at(2020, 3, 3, 8);
    ctx.checkin_repo().create(&checkin).await.unwrap();

    let stats = RecapService::new(&ctx)
        .year_in_review(&user, Some(2020))
        .await
        .unwrap();
    assert_eq!(stats.year, 2020);
    assert_eq!(stats.posts_count, 2);
    assert_eq!(stats.comments_count, 1);
    assert_eq!(stats.checkins_count, 1);
    assert_eq!(stats.top_tags[0].tag, "#hello");
    assert_eq!(stats.top_tags[0].count, 2);
    // One post in January, one in December: the tie resolves to January
    assert_eq!(stats.most_active_month, Some(0));
}

#[tokio::test]
async fn test_recap_defaults_to_the_current_year() {
    let ctx = test_context();
    let user = RecordId::new(register_user(&ctx).await.id);

    PostService::new(&ctx)
        .create_post(&user, post_request("this year"))
        .await
        .unwrap();

    let stats = RecapService::new(&ctx)
        .year_in_review(&user, None)
        .await
        .unwrap();
    assert_eq!(stats.year, Utc::now().year());
    assert_eq!(stats.posts_count, 1);
}

// ============================================================================
// Groups
// ============================================================================

#[tokio::test]
async fn test_group_create_join_leave() {
    let ctx = test_context();
    let creator = RecordId::new(register_user(&ctx).await.id);
    let joiner = RecordId::new(register_user(&ctx).await.id);
    let groups = GroupService::new(&ctx);

    let group = groups
        .create_group(&creator, unique_group_request())
        .await
        .unwrap();
    let group_id = RecordId::new(group.id.clone());
    assert_eq!(group.member_count, 1);

    let joined = groups.join_group(&joiner, &group_id).await.unwrap();
    assert_eq!(joined.member_count, 2);

    // Joining twice stays idempotent
    let joined_again = groups.join_group(&joiner, &group_id).await.unwrap();
    assert_eq!(joined_again.member_count, 2);

    assert_eq!(groups.groups_for_user(&joiner).await.unwrap().len(), 1);

    let left = groups.leave_group(&joiner, &group_id).await.unwrap();
    assert_eq!(left.member_count, 1);
    assert!(groups.groups_for_user(&joiner).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_group_search_is_case_insensitive() {
    let ctx = test_context();
    let creator = RecordId::new(register_user(&ctx).await.id);
    let groups = GroupService::new(&ctx);

    let mut request = unique_group_request();
    request.name = "Night Runners".to_string();
    groups.create_group(&creator, request).await.unwrap();

    assert_eq!(groups.search("night").await.unwrap().len(), 1);
    assert_eq!(groups.search("RUNNERS").await.unwrap().len(), 1);
    assert!(groups.search("chess").await.unwrap().is_empty());
}

// ============================================================================
// Profiles, Follows, Visits
// ============================================================================

#[tokio::test]
async fn test_profile_update_is_field_by_field() {
    let ctx = test_context();
    let user = RecordId::new(register_user(&ctx).await.id);
    let users = UserService::new(&ctx);

    let updated = users
        .update_profile(
            &user,
            UpdateProfileRequest {
                bio: Some("running and reading".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.bio, "running and reading");
    // Untouched fields survive
    assert_eq!(updated.tags.len(), 3);
    assert!(updated.last_active_at.is_some());
}

#[tokio::test]
async fn test_follow_rules() {
    let ctx = test_context();
    let alice = RecordId::new(register_user(&ctx).await.id);
    let bob = RecordId::new(register_user(&ctx).await.id);
    let users = UserService::new(&ctx);

    let err = users.follow(&alice, &alice).await.unwrap_err();
    assert_eq!(err.error_code(), "CANNOT_FOLLOW_SELF");

    users.follow(&alice, &bob).await.unwrap();
    // Duplicate follow is a silent no-op
    users.follow(&alice, &bob).await.unwrap();
    let alice_entity = users.get_user_entity(&alice).await.unwrap();
    assert_eq!(alice_entity.following, vec![bob.clone()]);

    users.unfollow(&alice, &bob).await.unwrap();
    let alice_entity = users.get_user_entity(&alice).await.unwrap();
    assert!(alice_entity.following.is_empty());
}

#[tokio::test]
async fn test_profile_visits_skip_self_views() {
    let ctx = test_context();
    let owner = RecordId::new(register_user(&ctx).await.id);
    let visitor = RecordId::new(register_user(&ctx).await.id);
    let users = UserService::new(&ctx);

    assert_eq!(
        users.record_profile_visit(&owner, Some(&owner)).await.unwrap(),
        0
    );
    assert_eq!(
        users.record_profile_visit(&owner, Some(&visitor)).await.unwrap(),
        1
    );
    assert_eq!(users.record_profile_visit(&owner, None).await.unwrap(), 2);
    assert_eq!(users.visit_count(&owner).await.unwrap(), 2);
}

// ============================================================================
// Admin
// ============================================================================

#[tokio::test]
async fn test_moderation_requires_the_admin_role() {
    let ctx = seeded_context();
    let regular = RecordId::new("u_10001");
    let admin = AdminService::new(&ctx);

    let err = admin.list_users(&regular).await.unwrap_err();
    assert_eq!(err.error_code(), "ADMIN_REQUIRED");

    let err = admin
        .set_banned(&regular, &RecordId::new("u_10002"), true)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "ADMIN_REQUIRED");
}

#[tokio::test]
async fn test_admin_moderation_flow() {
    let ctx = seeded_context();
    let admin_id = RecordId::new("u_admin");
    let admin = AdminService::new(&ctx);

    let users = admin.list_users(&admin_id).await.unwrap();
    assert_eq!(users.len(), 3);

    let reset = admin
        .reset_avatar(&admin_id, &RecordId::new("u_10002"))
        .await
        .unwrap();
    assert!(reset.avatar.starts_with("img/avatars/"));

    let audit = admin.audit_posts(&admin_id).await.unwrap();
    assert_eq!(audit.len(), 5);
    // Newest first
    assert!(audit
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}

// ============================================================================
// Seeded store & discovery
// ============================================================================

#[tokio::test]
async fn test_seeded_accounts_login_and_feed_reads() {
    let ctx = seeded_context();
    let auth = AuthService::new(&ctx);

    let user = auth
        .login(campus_service::dto::LoginRequest {
            student_id: "admin".to_string(),
            password: campus_store::DEMO_PASSWORD.to_string(),
            remember_me: false,
        })
        .await
        .unwrap();
    assert_eq!(user.role, "admin");

    // Recommended feed hides the seeded friends-only post
    let feed = PostService::new(&ctx)
        .feed(None, &FeedQuery::default())
        .await
        .unwrap();
    assert_eq!(feed.len(), 4);

    let topics = PostService::new(&ctx).hot_topics().await.unwrap();
    assert_eq!(topics[0].tag, "#exams");
    assert_eq!(topics[0].count, 2);
}

#[tokio::test]
async fn test_theme_preference_roundtrip() {
    use campus_core::traits::Theme;
    use campus_service::services::PreferenceService;

    let ctx = test_context();
    let prefs = PreferenceService::new(&ctx);

    assert_eq!(prefs.theme().await.unwrap(), None);
    prefs.set_theme(Some(Theme::Dark)).await.unwrap();
    assert_eq!(prefs.theme().await.unwrap(), Some(Theme::Dark));
    prefs.set_theme(None).await.unwrap();
    assert_eq!(prefs.theme().await.unwrap(), None);
}

#[tokio::test]
async fn test_active_users_excludes_admins() {
    let ctx = seeded_context();
    let ranked = UserService::new(&ctx).active_users().await.unwrap();

    assert_eq!(ranked.len(), 2);
    // u_10001 authored three seeded posts, u_10002 two
    assert_eq!(ranked[0].post_count, 3);
    assert_eq!(ranked[1].post_count, 2);
}
