use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup form payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "first name is required"))]
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Login form payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
