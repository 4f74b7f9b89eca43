use crate::models::common::PaginationQuery;
use serde::Deserialize;

pub const GRADE_MIN: i32 = 1;
pub const GRADE_MAX: i32 = 5;

// 评分请求
#[derive(Debug, Clone, Deserialize)]
pub struct GradeAssignmentRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub assignment_id: i64,
    pub grade: i32,
}

impl GradeAssignmentRequest {
    /// 成绩范围校验，在进入评分服务之前执行
    pub fn validate_grade(&self) -> Result<(), &'static str> {
        if self.grade < GRADE_MIN || self.grade > GRADE_MAX {
            return Err("Grade must be between 1 and 5");
        }
        Ok(())
    }
}

// 成绩记录查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct EntryListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub assignment_id: Option<i64>,
}

// 成绩记录查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct EntryListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub assignment_id: Option<i64>,
}

impl From<EntryListParams> for EntryListQuery {
    fn from(params: EntryListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            student_id: params.student_id,
            subject_id: params.subject_id,
            assignment_id: params.assignment_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(grade: i32) -> GradeAssignmentRequest {
        GradeAssignmentRequest {
            student_id: 1,
            subject_id: 1,
            assignment_id: 1,
            grade,
        }
    }

    #[test]
    fn test_grade_bounds() {
        assert!(request(1).validate_grade().is_ok());
        assert!(request(5).validate_grade().is_ok());
        assert!(request(0).validate_grade().is_err());
        assert!(request(6).validate_grade().is_err());
    }
}
