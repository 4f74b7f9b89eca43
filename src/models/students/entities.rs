use serde::{Deserialize, Serialize};

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    // 年级，1-12
    pub grade_level: i32,
    pub email: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    // 出生日期，必须在过去
    pub birth_date: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
