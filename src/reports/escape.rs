//! Escaping for HTML report output.
//!
//! Product names, labels and dates come straight from the input file and the
//! API; all of it is escaped before it is placed into the report template.

/// Escape a string for safe inclusion in HTML content.
///
/// Escapes `&`, `<`, `>`, `"` and `'`.
///
/// # Examples
///
/// ```
/// use eol_lookup::reports::escape::escape_html;
///
/// assert_eq!(escape_html("13 <Trixie>"), "13 &lt;Trixie&gt;");
/// assert_eq!(escape_html("2028-08-09"), "2028-08-09");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_basic() {
        assert_eq!(escape_html("Debian"), "Debian");
        assert_eq!(escape_html("AT&T"), "AT&amp;T");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("24.04 'Noble Numbat'"), "24.04 &#x27;Noble Numbat&#x27;");
    }

    #[test]
    fn test_escape_html_script_injection() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
        // Already-escaped text is escaped again, not passed through
        assert_eq!(escape_html("&lt;b&gt;"), "&amp;lt;b&amp;gt;");
    }

    #[test]
    fn test_unicode_preservation() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("Ubuntu 日本語"), "Ubuntu 日本語");
    }
}
