use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 科目查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct SubjectListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

// 科目创建请求
#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    pub teacher_id: Option<i64>,
}

// 科目更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub teacher_id: Option<i64>,
}

// 选课请求
#[derive(Debug, Deserialize)]
pub struct EnrollStudentRequest {
    pub student_id: i64,
}

// 科目列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct SubjectListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

impl From<SubjectListParams> for SubjectListQuery {
    fn from(params: SubjectListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            teacher_id: params.teacher_id,
            search: params.search,
        }
    }
}
