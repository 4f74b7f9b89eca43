use crate::models::users::entities::{SchoolActor, User};
use serde::Serialize;

// 登录响应
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub user: User,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

// 当前用户信息，附带其对应的学校成员（管理员为 None）
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: User,
    pub actor: Option<SchoolActor>,
}
