use super::entities::Subject;
use crate::models::common::PaginationInfo;
use crate::models::students::entities::Student;
use serde::Serialize;

// 科目响应
#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub subject: Subject,
}

// 科目列表响应
#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub items: Vec<Subject>,
    pub pagination: PaginationInfo,
}

// 选课后的科目视图：科目加上当前选课学生
#[derive(Debug, Serialize)]
pub struct SubjectMembershipResponse {
    pub subject: Subject,
    pub students: Vec<Student>,
}
