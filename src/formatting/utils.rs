pub fn extract_first_name(name: &str) -> &str {
    name.split_whitespace()
        .next()
        .unwrap_or(name)
}

/// Cut `s` to at most `max_len` characters, ending with "..." when shortened.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len < 4 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// Collapse line breaks so multi-line bodies fit on one row.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 8), "a lon...");
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("équipe à gérer", 9), "équipe...");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("quia et suscipit\nsuscipit recusandae"), "quia et suscipit suscipit recusandae");
    }

    #[test]
    fn test_extract_first_name() {
        assert_eq!(extract_first_name("Leanne Graham"), "Leanne");
        assert_eq!(extract_first_name(""), "");
    }
}
