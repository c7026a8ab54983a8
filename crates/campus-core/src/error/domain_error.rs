//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(RecordId),

    #[error("Post not found: {0}")]
    PostNotFound(RecordId),

    #[error("Comment not found: {0}")]
    CommentNotFound(RecordId),

    #[error("Group not found: {0}")]
    GroupNotFound(RecordId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Student id must contain only digits")]
    InvalidStudentId,

    #[error("Password too short: minimum {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Password confirmation does not match")]
    PasswordMismatch,

    #[error("At least {min} interest tags are required")]
    TooFewTags { min: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the post author")]
    NotPostAuthor,

    #[error("Not the comment author")]
    NotCommentAuthor,

    #[error("Not a member of this group")]
    NotGroupMember,

    #[error("Account is banned")]
    UserBanned,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Student id already registered")]
    StudentIdTaken,

    #[error("Already checked in today")]
    AlreadyCheckedInToday,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot follow yourself")]
    CannotFollowSelf,

    #[error("No pending registration found")]
    NoPendingRegistration,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for structured reporting
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::GroupNotFound(_) => "UNKNOWN_GROUP",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidStudentId => "INVALID_STUDENT_ID",
            Self::PasswordTooShort { .. } => "PASSWORD_TOO_SHORT",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::TooFewTags { .. } => "TOO_FEW_TAGS",

            // Authorization
            Self::NotPostAuthor => "NOT_POST_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotGroupMember => "NOT_GROUP_MEMBER",
            Self::UserBanned => "USER_BANNED",

            // Conflict
            Self::StudentIdTaken => "STUDENT_ID_TAKEN",
            Self::AlreadyCheckedInToday => "ALREADY_CHECKED_IN",

            // Business Rules
            Self::CannotFollowSelf => "CANNOT_FOLLOW_SELF",
            Self::NoPendingRegistration => "NO_PENDING_REGISTRATION",

            // Infrastructure
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::GroupNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidStudentId
                | Self::PasswordTooShort { .. }
                | Self::PasswordMismatch
                | Self::TooFewTags { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotPostAuthor | Self::NotCommentAuthor | Self::NotGroupMember | Self::UserBanned
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::StudentIdTaken | Self::AlreadyCheckedInToday)
    }

    /// Check if the user can fix this by correcting their input
    pub fn is_user_correctable(&self) -> bool {
        self.is_validation() || self.is_conflict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(RecordId::new("u_1"));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::StudentIdTaken;
        assert_eq!(err.code(), "STUDENT_ID_TAKEN");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::PostNotFound(RecordId::new("p_1")).is_not_found());
        assert!(!DomainError::StudentIdTaken.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::PasswordTooShort { min: 6 }.is_validation());
        assert!(DomainError::InvalidStudentId.is_validation());
        assert!(!DomainError::UserBanned.is_validation());
    }

    #[test]
    fn test_is_user_correctable() {
        assert!(DomainError::PasswordMismatch.is_user_correctable());
        assert!(DomainError::AlreadyCheckedInToday.is_user_correctable());
        assert!(!DomainError::StorageError("io".to_string()).is_user_correctable());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::UserNotFound(RecordId::new("u_42"));
        assert_eq!(err.to_string(), "User not found: u_42");

        let err = DomainError::PasswordTooShort { min: 6 };
        assert_eq!(err.to_string(), "Password too short: minimum 6 characters");
    }
}
