//! Recap service

use campus_core::stats::year_in_review;
use campus_core::value_objects::RecordId;
use chrono::{Datelike, Utc};
use tracing::instrument;

use crate::dto::YearStatsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::user::UserService;

/// Recap service
pub struct RecapService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecapService<'a> {
    /// Create a new RecapService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The yearly recap for a user; `year` defaults to the current year.
    #[instrument(skip(self))]
    pub async fn year_in_review(
        &self,
        user_id: &RecordId,
        year: Option<i32>,
    ) -> ServiceResult<YearStatsResponse> {
        UserService::new(self.ctx).get_user_entity(user_id).await?;

        let year = year.unwrap_or_else(|| Utc::now().year());
        let posts = self.ctx.post_repo().find_by_author(user_id).await?;
        let comments = self.ctx.comment_repo().find_by_author(user_id).await?;
        let checkins = self.ctx.checkin_repo().find_by_user(user_id).await?;

        let stats = year_in_review(year, &posts, &comments, &checkins);
        Ok(YearStatsResponse::from(&stats))
    }
}
