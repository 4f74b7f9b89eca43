use super::entities::GradebookEntry;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 成绩记录响应
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub entry: GradebookEntry,
}

// 成绩记录列表响应
#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub items: Vec<GradebookEntry>,
    pub pagination: PaginationInfo,
}
