use super::entities::UserRole;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct UserListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}

// 为学校成员开通账号的请求
#[derive(Debug, Deserialize)]
pub struct ProvisionAccountRequest {
    pub actor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

// 创建管理员账号的请求
#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    pub username: String,
}

// 修改密码请求
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

// 用户创建参数（用于存储层，密码已哈希）
#[derive(Debug, Clone)]
pub struct CreateUserRecord {
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
}

// 用户更新参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRecord {
    pub password_hash: Option<String>,
    pub enabled: Option<bool>,
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}

impl From<UserListParams> for UserListQuery {
    fn from(params: UserListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            role: params.role,
            search: params.search,
        }
    }
}
