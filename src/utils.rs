/// Removes every newline from fetched page content
///
/// Only `'\n'` is stripped; carriage returns and other whitespace are kept so
/// the markup stays otherwise untouched.
pub fn clean_data(text: &str) -> String {
    text.replace('\n', "")
}

/// Turns a URL into a string usable as a file name stem
pub fn sanitize_filename(url: &str) -> String {
    let name = url
        .trim_start_matches("http://")
        .trim_start_matches("https://")
        .trim_end_matches('/')
        .replace(['/', ':', '?', '&', '=', '#', '%', '.'], "_");

    // Limit filename length
    name.chars().take(100).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_data_removes_newlines_only() {
        assert_eq!(clean_data("<p>a\nb</p>\n"), "<p>ab</p>");
        assert_eq!(clean_data("a\r\nb\tc"), "a\rb\tc");
        assert_eq!(clean_data(""), "");
    }

    #[test]
    fn test_clean_data_is_idempotent() {
        let once = clean_data("x\n\ny\nz");
        assert_eq!(clean_data(&once), once);
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("https://stockmarket.com/"), "stockmarket_com");
        assert_eq!(
            sanitize_filename("http://example.org/a/b?q=1"),
            "example_org_a_b_q_1"
        );

        let long = format!("https://example.com/{}", "é".repeat(200));
        assert_eq!(sanitize_filename(&long).chars().count(), 100);
    }
}
