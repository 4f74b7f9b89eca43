use super::entities::User;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 用户响应
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

// 用户列表响应
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub items: Vec<User>,
    pub pagination: PaginationInfo,
}

/// 开户凭据：明文密码只在这一次响应中出现，之后不可恢复
#[derive(Debug, Clone, Serialize)]
pub struct InitialCredentials {
    pub username: String,
    pub password: String,
}

// 开户响应
#[derive(Debug, Serialize)]
pub struct ProvisionAccountResponse {
    pub user: User,
    pub credentials: InitialCredentials,
}
