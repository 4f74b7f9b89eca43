use super::entities::AssignmentKind;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 作业查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct AssignmentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub subject_id: Option<i64>,
    pub kind: Option<AssignmentKind>,
}

// 作业创建请求
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub subject_id: i64,
    pub name: String,
    pub kind: AssignmentKind,
    pub description: Option<String>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
}

// 作业更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub name: Option<String>,
    pub kind: Option<AssignmentKind>,
    pub description: Option<String>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
}

// 作业列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub subject_id: Option<i64>,
    pub kind: Option<AssignmentKind>,
}

impl From<AssignmentListParams> for AssignmentListQuery {
    fn from(params: AssignmentListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            subject_id: params.subject_id,
            kind: params.kind,
        }
    }
}
