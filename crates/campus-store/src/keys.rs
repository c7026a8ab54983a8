//! Storage key names
//!
//! One entry per key. The names are load-bearing: an existing data
//! directory keeps working only if they stay as they are.

pub const USERS: &str = "campuslife_users";
pub const POSTS: &str = "campuslife_posts";
pub const COMMENTS: &str = "campuslife_comments";
pub const GROUPS: &str = "campuslife_groups";
pub const CHECKINS: &str = "campuslife_checkins";
pub const FAVORITES: &str = "campuslife_favorites";
pub const REPOSTS: &str = "campuslife_reposts";
pub const USER_VISITS: &str = "campuslife_userVisits";
pub const CURRENT_USER_ID: &str = "campuslife_currentUserId";
pub const REMEMBERED_STUDENT_ID: &str = "campuslife_rememberedStudentId";
pub const THEME: &str = "campuslife_theme";
pub const PENDING_REGISTRATION: &str = "campuslife_pendingRegistration";
