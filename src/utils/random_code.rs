use rand::Rng;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const DIGITS: &[u8] = b"0123456789";

/// 生成固定长度的随机字母数字串（用于初始密码）
pub fn generate_random_password(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHANUMERIC.len());
            ALPHANUMERIC[idx] as char
        })
        .collect()
}

/// 生成固定长度的随机数字串（用于用户名后缀）
pub fn generate_numeric_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..DIGITS.len());
            DIGITS[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length_and_charset() {
        let pwd = generate_random_password(12);
        assert_eq!(pwd.len(), 12);
        assert!(pwd.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_numeric_code_is_digits() {
        let code = generate_numeric_code(2);
        assert_eq!(code.len(), 2);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}
