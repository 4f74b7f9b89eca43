/// 转义 LIKE 模式中的通配符，避免用户输入被当作模式解释
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_wildcards() {
        assert_eq!(escape_like_pattern("100%_done"), "100\\%\\_done");
    }

    #[test]
    fn test_plain_input_unchanged() {
        assert_eq!(escape_like_pattern("algebra"), "algebra");
    }
}
