//! Escaping for user text placed inside card HTML.

/// Card text widgets read a small HTML subset, so `&`, `<` and `>` in user
/// input must not reach them raw.
pub(crate) fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_markup;

    #[test]
    fn markup_escape_leaves_plain_text_alone() {
        assert_eq!(escape_markup("a & b"), "a &amp; b");
        assert_eq!(escape_markup("<b>Ada</b>"), "&lt;b&gt;Ada&lt;/b&gt;");
        assert_eq!(escape_markup("plain"), "plain");
    }
}
