use serde::{Deserialize, Serialize};

// 作业类型
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentKind {
    Homework, // 作业
    Test,     // 测验
    Project,  // 课题
    Quiz,     // 小测
}

impl AssignmentKind {
    pub const HOMEWORK: &'static str = "homework";
    pub const TEST: &'static str = "test";
    pub const PROJECT: &'static str = "project";
    pub const QUIZ: &'static str = "quiz";
}

impl<'de> Deserialize<'de> for AssignmentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AssignmentKind::HOMEWORK => Ok(AssignmentKind::Homework),
            AssignmentKind::TEST => Ok(AssignmentKind::Test),
            AssignmentKind::PROJECT => Ok(AssignmentKind::Project),
            AssignmentKind::QUIZ => Ok(AssignmentKind::Quiz),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid assignment kind: '{s}'. Supported kinds: homework, test, project, quiz"
            ))),
        }
    }
}

impl std::fmt::Display for AssignmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentKind::Homework => write!(f, "{}", AssignmentKind::HOMEWORK),
            AssignmentKind::Test => write!(f, "{}", AssignmentKind::TEST),
            AssignmentKind::Project => write!(f, "{}", AssignmentKind::PROJECT),
            AssignmentKind::Quiz => write!(f, "{}", AssignmentKind::QUIZ),
        }
    }
}

impl std::str::FromStr for AssignmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "homework" => Ok(AssignmentKind::Homework),
            "test" => Ok(AssignmentKind::Test),
            "project" => Ok(AssignmentKind::Project),
            "quiz" => Ok(AssignmentKind::Quiz),
            _ => Err(format!("Invalid assignment kind: {s}")),
        }
    }
}

// 作业实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub subject_id: i64,
    pub name: String,
    pub kind: AssignmentKind,
    pub description: Option<String>,
    // 截止时间，创建时必须在未来
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            AssignmentKind::Homework,
            AssignmentKind::Test,
            AssignmentKind::Project,
            AssignmentKind::Quiz,
        ] {
            assert_eq!(
                AssignmentKind::from_str(&kind.to_string()).unwrap(),
                kind
            );
        }
    }

    #[test]
    fn test_kind_rejects_unknown() {
        assert!(AssignmentKind::from_str("exam").is_err());
    }
}
