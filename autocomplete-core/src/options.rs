//! Parsing of embedded option-list fixtures.

/// Parses a newline-separated option list embedded via `include_str!`.
/// Lines are trimmed; blank lines are skipped. Duplicate entries are kept
/// as-is so they display twice, matching the widget contract.
pub fn parse_option_list(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_option_list;

    #[test]
    fn test_parse_option_list() {
        let data = "Japan\nBrazil\n\n  France  \nBrazil\n";
        let options = parse_option_list(data);
        assert_eq!(options, ["Japan", "Brazil", "France", "Brazil"]);
    }

    #[test]
    fn test_parse_empty_fixture() {
        assert!(parse_option_list("\n\n").is_empty());
    }
}
