use crate::domain::{Category, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct VoteRequest<'a> {
    pub device_token: &'a str,
    pub category: Category,
    pub candidate_name: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct VoteResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LogoutRequest<'a> {
    pub token: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub token: Option<String>,
    pub user: Option<User>,
}

