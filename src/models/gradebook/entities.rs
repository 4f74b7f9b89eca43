use serde::{Deserialize, Serialize};

/// 成绩记录
///
/// 同一 (student_id, subject_id, assignment_id) 三元组至多存在一条记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradebookEntry {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub assignment_id: i64,
    // 成绩，1-5
    pub grade: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
