//! XML text escaping

use std::borrow::Cow;

/// Escape `&`, `<`, `>`, `"` and `'` for use in element text or attribute values.
///
/// The single quote becomes `&#039;`, matching the entity set produced by
/// HTML-style `ENT_QUOTES` escaping. Input is scanned once, so existing
/// entities are escaped again rather than passed through.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    match s.find(needs_escape) {
        None => Cow::Borrowed(s),
        Some(first) => {
            let mut out = String::with_capacity(s.len() + 16);
            out.push_str(&s[..first]);
            push_escaped(&mut out, &s[first..]);
            Cow::Owned(out)
        }
    }
}

/// Append the escaped form of `s` to `out`
pub(crate) fn push_escaped(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
}

fn needs_escape(ch: char) -> bool {
    matches!(ch, '&' | '<' | '>' | '"' | '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_xml("plain text"), Cow::Borrowed("plain text")));
        assert!(matches!(escape_xml(""), Cow::Borrowed("")));
    }

    #[test]
    fn test_all_five() {
        assert_eq!(
            escape_xml(r#"Tom & "Jerry" <'cat'>"#),
            "Tom &amp; &quot;Jerry&quot; &lt;&#039;cat&#039;&gt;"
        );
    }

    #[test]
    fn test_only_escapable_characters() {
        assert_eq!(escape_xml("&&"), "&amp;&amp;");
        assert_eq!(escape_xml("<>"), "&lt;&gt;");
    }

    #[test]
    fn test_entities_are_escaped_again() {
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_non_ascii_untouched() {
        assert_eq!(escape_xml("Grüße & 日本"), "Grüße &amp; 日本");
    }
}
