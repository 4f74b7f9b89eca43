use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct TeacherListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 教师创建请求
#[derive(Debug, Deserialize)]
pub struct CreateTeacherRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub birth_date: chrono::DateTime<chrono::Utc>,
}

// 教师更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateTeacherRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

impl From<TeacherListParams> for TeacherListQuery {
    fn from(params: TeacherListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            search: params.search,
        }
    }
}
