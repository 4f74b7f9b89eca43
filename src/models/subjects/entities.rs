use serde::{Deserialize, Serialize};

// 科目实体
//
// teacher_id 为空表示无归属教师的历史课程数据。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub teacher_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 选课记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub subject_id: i64,
    pub student_id: i64,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
