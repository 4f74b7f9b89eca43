use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub grade_level: Option<i32>,
    pub search: Option<String>,
}

// 学生创建请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub grade_level: i32,
    pub email: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub birth_date: chrono::DateTime<chrono::Utc>,
}

// 学生更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub grade_level: Option<i32>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub grade_level: Option<i32>,
    pub search: Option<String>,
}

impl From<StudentListParams> for StudentListQuery {
    fn from(params: StudentListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            grade_level: params.grade_level,
            search: params.search,
        }
    }
}
