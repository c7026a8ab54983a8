//! Data transfer objects
//!
//! Requests carry `validator` constraints; responses are plain `Serialize`
//! structs built through the `From` mappers.

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CheckinRequest, CompleteRegistrationRequest, CreateCommentRequest, CreateGroupRequest,
    CreatePostRequest, FeedQuery, FeedTab, LoginRequest, RegisterRequest, RepostRequest,
    UpdatePostRequest, UpdateProfileRequest,
};
pub use responses::{
    ActiveUserResponse, CheckinResponse, CheckinResult, CheckinSummaryResponse, CommentResponse,
    CurrentUserResponse, GroupResponse, PostResponse, RepostResponse, TagCountResponse,
    UserResponse, YearStatsResponse,
};
