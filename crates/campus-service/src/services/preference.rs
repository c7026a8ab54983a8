//! Preference service

use campus_core::traits::Theme;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Preference service
pub struct PreferenceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PreferenceService<'a> {
    /// Create a new PreferenceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The saved display theme, if one was chosen
    #[instrument(skip(self))]
    pub async fn theme(&self) -> ServiceResult<Option<Theme>> {
        Ok(self.ctx.preference_repo().theme().await?)
    }

    /// Save or clear the display theme
    #[instrument(skip(self))]
    pub async fn set_theme(&self, theme: Option<Theme>) -> ServiceResult<()> {
        self.ctx.preference_repo().set_theme(theme).await?;
        info!(?theme, "Theme preference updated");
        Ok(())
    }
}
