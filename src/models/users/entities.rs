use serde::{Deserialize, Serialize};

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student, // 学生
    Teacher, // 教师
    Admin,   // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn teacher_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher, &Self::Admin]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Teacher, &Self::Admin]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid user role: '{s}'. Supported roles: student, teacher, admin"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "teacher" => Ok(UserRole::Teacher),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// 学校成员：带角色标签的学生或教师 ID
///
/// 管理员不是学校成员，不会出现在关联表中。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", content = "actor_id", rename_all = "snake_case")]
pub enum SchoolActor {
    Student(i64),
    Teacher(i64),
}

impl SchoolActor {
    pub fn role(&self) -> UserRole {
        match self {
            SchoolActor::Student(_) => UserRole::Student,
            SchoolActor::Teacher(_) => UserRole::Teacher,
        }
    }

    pub fn actor_id(&self) -> i64 {
        match self {
            SchoolActor::Student(id) | SchoolActor::Teacher(id) => *id,
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub role: UserRole,
    pub enabled: bool,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    // 生成访问令牌
    pub fn generate_access_token(&self) -> Result<String, String> {
        crate::utils::jwt::JwtUtils::generate_access_token(self.id, &self.role.to_string())
            .map_err(|e| format!("Failed to generate access token: {e}"))
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("Failed to generate token pair: {e}"))
    }
}

// 用户与学校成员的关联记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRelation {
    pub id: i64,
    pub user_id: i64,
    pub role: UserRole,
    pub actor_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl UserRelation {
    pub fn actor(&self) -> Option<SchoolActor> {
        match self.role {
            UserRole::Student => Some(SchoolActor::Student(self.actor_id)),
            UserRole::Teacher => Some(SchoolActor::Teacher(self.actor_id)),
            UserRole::Admin => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Student, UserRole::Teacher, UserRole::Admin] {
            assert_eq!(UserRole::from_str(&role.to_string()).unwrap(), role);
        }
    }

    #[test]
    fn test_actor_role_and_id() {
        let actor = SchoolActor::Teacher(7);
        assert_eq!(actor.role(), UserRole::Teacher);
        assert_eq!(actor.actor_id(), 7);
    }

    #[test]
    fn test_admin_relation_has_no_actor() {
        let relation = UserRelation {
            id: 1,
            user_id: 1,
            role: UserRole::Admin,
            actor_id: 0,
            created_at: chrono::Utc::now(),
        };
        assert!(relation.actor().is_none());
    }
}
