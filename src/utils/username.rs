//! 用户名派生
//!
//! 开户时的用户名由姓名派生：小写、折叠常见重音字符、去掉空白和标点，
//! 按 名+姓 的顺序拼接，再追加随机数字后缀。

/// 把姓名折叠成用户名主干：名在前，姓在后
pub fn username_stem(first_name: &str, last_name: &str) -> String {
    let mut stem = String::new();
    fold_into(&mut stem, first_name);
    fold_into(&mut stem, last_name);
    stem
}

fn fold_into(out: &mut String, part: &str) {
    for c in part.chars() {
        match fold_char(c) {
            Some(mapped) => out.push_str(mapped),
            None => {
                // 非拉丁字符和标点在这里被丢弃
                if c.is_ascii_alphanumeric() {
                    out.push(c.to_ascii_lowercase());
                }
            }
        }
    }
}

/// 折叠常见拉丁重音字符，返回 None 表示字符无需折叠
fn fold_char(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "a",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ý' | 'ÿ' | 'Ý' => "y",
        'ñ' | 'Ñ' => "n",
        'ç' | 'Ç' => "c",
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        'ø' | 'Ø' => "o",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_is_first_then_last() {
        assert_eq!(username_stem("John", "Doe"), "johndoe");
    }

    #[test]
    fn test_stem_strips_whitespace_and_punctuation() {
        assert_eq!(username_stem("Mary Jane", "O'Brien"), "maryjaneobrien");
    }

    #[test]
    fn test_stem_folds_accents() {
        assert_eq!(username_stem("Zsófia", "Müller"), "zsofiamuller");
        assert_eq!(username_stem("François", "Strauß"), "francoisstrauss");
    }

    #[test]
    fn test_stem_drops_non_latin() {
        // 无法折叠的字符被丢弃而不是保留
        assert_eq!(username_stem("Анна", "Doe"), "doe");
    }
}
