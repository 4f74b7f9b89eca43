use super::entities::Teacher;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 教师响应
#[derive(Debug, Serialize)]
pub struct TeacherResponse {
    pub teacher: Teacher,
}

// 教师列表响应
#[derive(Debug, Serialize)]
pub struct TeacherListResponse {
    pub items: Vec<Teacher>,
    pub pagination: PaginationInfo,
}
