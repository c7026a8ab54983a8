//! Authentication service
//!
//! Handles the two-step registration flow, login/logout, the remembered
//! student id, and session lookups.

use campus_common::auth::{hash_password, validate_password_length, verify_password};
use campus_common::AppError;
use campus_core::entities::User;
use campus_core::traits::PendingRegistration;
use campus_core::value_objects::RecordKind;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    CompleteRegistrationRequest, CurrentUserResponse, LoginRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Interest tags required to finish registration.
pub const MIN_INTEREST_TAGS: usize = 3;

/// Upper bound on tags stored on a profile.
pub const MAX_PROFILE_TAGS: usize = 8;

/// Avatar assigned when step two supplies none.
const DEFAULT_AVATAR: &str = "https://api.dicebear.com/7.x/initials/svg?seed=CL";

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Step one of registration: validate credentials and park them as a
    /// pending registration.
    #[instrument(skip(self, request), fields(student_id = %request.student_id))]
    pub async fn register_basic(&self, request: RegisterRequest) -> ServiceResult<()> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        if !request.student_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(campus_core::DomainError::InvalidStudentId.into());
        }

        validate_password_length(&request.password).map_err(ServiceError::from)?;

        if request.password != request.confirm_password {
            return Err(campus_core::DomainError::PasswordMismatch.into());
        }

        if self
            .ctx
            .user_repo()
            .student_id_exists(&request.student_id)
            .await?
        {
            return Err(campus_core::DomainError::StudentIdTaken.into());
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let pending = PendingRegistration {
            student_id: request.student_id,
            nickname: request.nickname,
            password_hash,
        };
        self.ctx
            .session_repo()
            .set_pending_registration(Some(&pending))
            .await?;

        info!(student_id = %pending.student_id, "Registration step one stored");
        Ok(())
    }

    /// Step two of registration: require interest tags, create the account,
    /// and log it in.
    #[instrument(skip(self, request))]
    pub async fn complete_registration(
        &self,
        request: CompleteRegistrationRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let pending = self
            .ctx
            .session_repo()
            .pending_registration()
            .await?
            .ok_or(campus_core::DomainError::NoPendingRegistration)?;

        if request.tags.len() < MIN_INTEREST_TAGS {
            return Err(campus_core::DomainError::TooFewTags {
                min: MIN_INTEREST_TAGS,
            }
            .into());
        }

        let mut user = User::new(
            self.ctx.generate_id(RecordKind::User),
            pending.student_id,
            pending.nickname,
        );
        user.avatar = request
            .avatar
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string());
        user.tags = request.tags;
        user.tags.truncate(MAX_PROFILE_TAGS);

        self.ctx
            .user_repo()
            .create(&user, &pending.password_hash)
            .await?;

        self.ctx
            .session_repo()
            .set_pending_registration(None)
            .await?;
        // Auto-login the fresh account
        self.ctx
            .session_repo()
            .set_current_user_id(Some(&user.id))
            .await?;

        info!(user_id = %user.id, "Registration completed");
        Ok(CurrentUserResponse::from(&user))
    }

    /// Login with student id and password
    #[instrument(skip(self, request), fields(student_id = %request.student_id))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<CurrentUserResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_student_id(&request.student_id)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown student id");
                ServiceError::not_found("User", request.student_id.clone())
            })?;

        if user.banned {
            warn!(user_id = %user.id, "Login failed: banned account");
            return Err(campus_core::DomainError::UserBanned.into());
        }

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        if !is_valid {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        self.ctx
            .session_repo()
            .set_current_user_id(Some(&user.id))
            .await?;

        if request.remember_me {
            self.ctx
                .session_repo()
                .set_remembered_student_id(Some(&request.student_id))
                .await?;
        } else {
            self.ctx
                .session_repo()
                .set_remembered_student_id(None)
                .await?;
        }

        info!(user_id = %user.id, "Logged in");
        Ok(CurrentUserResponse::from(&user))
    }

    /// Log out the current session
    #[instrument(skip(self))]
    pub async fn logout(&self) -> ServiceResult<()> {
        self.ctx.session_repo().set_current_user_id(None).await?;
        info!("Logged out");
        Ok(())
    }

    /// The logged-in user, if any
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> ServiceResult<Option<User>> {
        let Some(user_id) = self.ctx.session_repo().current_user_id().await? else {
            return Ok(None);
        };
        Ok(self.ctx.user_repo().find_by_id(&user_id).await?)
    }

    /// Check whether anyone is logged in
    pub async fn is_logged_in(&self) -> ServiceResult<bool> {
        Ok(self.current_user().await?.is_some())
    }

    /// Check whether the logged-in user is an admin
    pub async fn is_admin(&self) -> ServiceResult<bool> {
        Ok(self
            .current_user()
            .await?
            .is_some_and(|user| user.is_admin()))
    }

    /// Require a logged-in user, or fail
    pub async fn require_user(&self) -> ServiceResult<User> {
        self.current_user()
            .await?
            .ok_or(ServiceError::App(AppError::NotLoggedIn))
    }

    /// Require a logged-in admin, or fail
    pub async fn require_admin(&self) -> ServiceResult<User> {
        let user = self.require_user().await?;
        if !user.is_admin() {
            return Err(ServiceError::App(AppError::AdminRequired));
        }
        Ok(user)
    }

    /// Student id remembered from a "remember me" login
    pub async fn remembered_student_id(&self) -> ServiceResult<Option<String>> {
        Ok(self.ctx.session_repo().remembered_student_id().await?)
    }
}
