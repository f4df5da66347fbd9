//! Shared text utilities: word counting and HTML escaping.

/// Count maximal non-whitespace runs in `text`.
///
/// Empty or whitespace-only input yields 0.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Escape `& < > " '` for safe embedding in an HTML fragment.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_maximal_nonwhitespace_runs() {
        assert_eq!(count_words("one two  three\n\tfour"), 4);
        assert_eq!(count_words("single"), 1);
    }

    #[test]
    fn empty_and_whitespace_count_zero() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t  "), 0);
    }

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"<b>"AT&T's"</b>"#),
            "&lt;b&gt;&quot;AT&amp;T&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }
}
