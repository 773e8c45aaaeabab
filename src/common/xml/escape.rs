use std::borrow::Cow;

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Built once, shared by every part writer
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters for element text and attribute values.
///
/// Characters XML 1.0 does not allow at all (C0 controls other than tab,
/// newline and carriage return, `U+FFFE`, `U+FFFF`) are dropped.
///
/// # Examples
///
/// ```
/// use deckbook::common::xml::escape_xml;
/// assert_eq!(escape_xml("R&D <2024>"), "R&amp;D &lt;2024&gt;");
/// assert_eq!(escape_xml("\"Q1\" 'final'"), "&quot;Q1&quot; &apos;final&apos;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    let s = strip_invalid_chars(s);
    XML_ESCAPER.replace_all(&s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[inline]
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

fn strip_invalid_chars(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

/// Text needs `xml:space="preserve"` when surrounding whitespace must survive.
#[inline]
pub fn needs_space_preserve(s: &str) -> bool {
    s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace)
}
