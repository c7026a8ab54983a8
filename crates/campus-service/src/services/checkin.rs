//! Check-in service
//!
//! Daily check-ins with the one-per-calendar-day rule (UTC) and the
//! streak/summary numbers derived from the history.

use campus_core::entities::Checkin;
use campus_core::stats::consecutive_day_streak;
use campus_core::value_objects::{RecordId, RecordKind};
use chrono::{Datelike, NaiveDate, Utc};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CheckinRequest, CheckinResponse, CheckinResult, CheckinSummaryResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Check-in service
pub struct CheckinService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CheckinService<'a> {
    /// Create a new CheckinService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check in for today.
    ///
    /// Rejects a second check-in on the same calendar day and returns the
    /// new record together with the updated streak.
    #[instrument(skip(self, request))]
    pub async fn check_in(
        &self,
        user_id: &RecordId,
        request: CheckinRequest,
    ) -> ServiceResult<CheckinResult> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        UserService::new(self.ctx).get_user_entity(user_id).await?;

        let today = Utc::now().date_naive();
        let history = self.ctx.checkin_repo().find_by_user(user_id).await?;
        if history.iter().any(|c| c.calendar_day() == today) {
            return Err(campus_core::DomainError::AlreadyCheckedInToday.into());
        }

        let note = request
            .note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let checkin = Checkin::new(
            self.ctx.generate_id(RecordKind::Checkin),
            user_id.clone(),
            note,
        );
        self.ctx.checkin_repo().create(&checkin).await?;
        UserService::new(self.ctx).touch_last_active(user_id).await?;

        let mut days: Vec<NaiveDate> = vec![checkin.calendar_day()];
        days.extend(history.iter().map(Checkin::calendar_day));
        let streak = consecutive_day_streak(&days, today);

        info!(user_id = %user_id, streak, "Checked in");
        Ok(CheckinResult {
            checkin: CheckinResponse::from(&checkin),
            streak,
        })
    }

    /// Whether the user already checked in today
    #[instrument(skip(self))]
    pub async fn has_checked_in_today(&self, user_id: &RecordId) -> ServiceResult<bool> {
        let today = Utc::now().date_naive();
        let history = self.ctx.checkin_repo().find_by_user(user_id).await?;
        Ok(history.iter().any(|c| c.calendar_day() == today))
    }

    /// Current consecutive-day streak ending today
    #[instrument(skip(self))]
    pub async fn streak(&self, user_id: &RecordId) -> ServiceResult<u32> {
        let history = self.ctx.checkin_repo().find_by_user(user_id).await?;
        let days: Vec<NaiveDate> = history.iter().map(Checkin::calendar_day).collect();
        Ok(consecutive_day_streak(&days, Utc::now().date_naive()))
    }

    /// A user's check-in history, newest first
    #[instrument(skip(self))]
    pub async fn history(&self, user_id: &RecordId) -> ServiceResult<Vec<CheckinResponse>> {
        let history = self.ctx.checkin_repo().find_by_user(user_id).await?;
        Ok(history.iter().map(CheckinResponse::from).collect())
    }

    /// The header numbers: total, streak, this calendar month, last check-in
    #[instrument(skip(self))]
    pub async fn summary(&self, user_id: &RecordId) -> ServiceResult<CheckinSummaryResponse> {
        let history = self.ctx.checkin_repo().find_by_user(user_id).await?;
        let now = Utc::now();
        let today = now.date_naive();

        let days: Vec<NaiveDate> = history.iter().map(Checkin::calendar_day).collect();
        let this_month = history
            .iter()
            .filter(|c| {
                let day = c.calendar_day();
                day.year() == today.year() && day.month() == today.month()
            })
            .count();

        Ok(CheckinSummaryResponse {
            total: history.len(),
            streak: consecutive_day_streak(&days, today),
            this_month,
            last_checkin_at: history.first().map(|c| c.created_at),
        })
    }
}
