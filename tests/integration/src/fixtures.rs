//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use campus_service::dto::{
    CompleteRegistrationRequest, CreateGroupRequest, CreatePostRequest, LoginRequest,
    RegisterRequest,
};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A registration request with a unique numeric student id
pub fn unique_register_request() -> RegisterRequest {
    let suffix = unique_suffix();
    // The 2024 prefix keeps generated ids clear of the seeded 2023 accounts
    RegisterRequest {
        student_id: format!("2024{suffix:04}"),
        password: "123456".to_string(),
        confirm_password: "123456".to_string(),
        nickname: format!("student{suffix}"),
    }
}

/// A step-two request with the minimum three interest tags
pub fn complete_registration_request() -> CompleteRegistrationRequest {
    CompleteRegistrationRequest {
        tags: vec![
            "#books".to_string(),
            "#running".to_string(),
            "#food".to_string(),
        ],
        avatar: None,
    }
}

/// A login request matching a registration request
pub fn login_request(register: &RegisterRequest, remember_me: bool) -> LoginRequest {
    LoginRequest {
        student_id: register.student_id.clone(),
        password: register.password.clone(),
        remember_me,
    }
}

/// A minimal public post request
pub fn post_request(content: &str) -> CreatePostRequest {
    CreatePostRequest {
        content: content.to_string(),
        images: Vec::new(),
        visibility: None,
        group_id: None,
    }
}

/// A group creation request with a unique name
pub fn unique_group_request() -> CreateGroupRequest {
    let suffix = unique_suffix();
    CreateGroupRequest {
        name: format!("Circle {suffix}"),
        description: Some("A test circle".to_string()),
        avatar: None,
    }
}
