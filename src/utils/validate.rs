use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_-]*$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    // 用户名格式校验：小写字母开头，只能包含小写字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must start with a letter and contain only lowercase letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 年级校验：1-12
pub fn validate_grade_level(grade_level: i32) -> Result<(), &'static str> {
    if !(1..=12).contains(&grade_level) {
        return Err("Grade level must be between 1 and 12");
    }
    Ok(())
}

/// 出生日期必须在过去
pub fn validate_birth_date(
    birth_date: &chrono::DateTime<chrono::Utc>,
) -> Result<(), &'static str> {
    if *birth_date >= chrono::Utc::now() {
        return Err("Birth date must be in the past");
    }
    Ok(())
}

/// 截止时间必须在未来（仅在设置了截止时间时）
pub fn validate_deadline(
    deadline: &chrono::DateTime<chrono::Utc>,
) -> Result<(), &'static str> {
    if *deadline <= chrono::Utc::now() {
        return Err("Deadline must be in the future");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_valid_username() {
        assert!(validate_username("johndoe42").is_ok());
        assert!(validate_username("a_b-c").is_ok());
    }

    #[test]
    fn test_username_too_short() {
        assert!(validate_username("ab").is_err());
    }

    #[test]
    fn test_username_bad_characters() {
        assert!(validate_username("John Doe").is_err());
        assert!(validate_username("42john").is_err());
    }

    #[test]
    fn test_valid_email() {
        assert!(validate_email("student@school.edu").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_grade_level_bounds() {
        assert!(validate_grade_level(1).is_ok());
        assert!(validate_grade_level(12).is_ok());
        assert!(validate_grade_level(0).is_err());
        assert!(validate_grade_level(13).is_err());
    }

    #[test]
    fn test_birth_date_must_be_past() {
        assert!(validate_birth_date(&(Utc::now() - Duration::days(365 * 10))).is_ok());
        assert!(validate_birth_date(&(Utc::now() + Duration::days(1))).is_err());
    }

    #[test]
    fn test_deadline_must_be_future() {
        assert!(validate_deadline(&(Utc::now() + Duration::days(7))).is_ok());
        assert!(validate_deadline(&(Utc::now() - Duration::days(1))).is_err());
    }
}
