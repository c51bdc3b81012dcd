//! Auth Endpoints
//!
//! Credential exchange for login and registration.

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::AuthResponse;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterArgs<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

// ========================
// Endpoints
// ========================

pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    api.post("/auth/login", Some(&LoginArgs { email, password })).await
}

pub async fn register(api: &ApiClient, args: &RegisterArgs<'_>) -> Result<AuthResponse, ApiError> {
    api.post("/auth/register", Some(args)).await
}
