//! Authentication helpers

mod password;

pub use password::{
    hash_password, validate_password_length, verify_password, PasswordService, MIN_PASSWORD_LEN,
};
