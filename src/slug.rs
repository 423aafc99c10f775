//! ASCII slugs: detect → romanize → lowercase → collapse → trim.
use crate::{
    detect::detect_language,
    lang::{Direction, ScriptBehaviour},
    registry::Registry,
    unicode::is_slug_char,
};
use std::borrow::Cow;

/// Slug of `text`. Script text is romanized with the detected pack first;
/// anything undetected is treated as already Latin. Never fails: characters
/// with no ASCII rendering simply become separators.
pub fn slugify(registry: &Registry, text: &str, separator: &str, max_keywords: usize) -> String {
    let latin: Cow<'_, str> = match detect_language(registry, text, max_keywords) {
        Some(pack) if !pack.is_latin_script() => pack.translate_string(text, Direction::Reverse),
        _ => Cow::Borrowed(text),
    };
    slugify_latin(&latin, separator)
}

/// Lowercases and joins `[a-z0-9]` runs with `separator`, without a leading
/// or trailing separator.
pub fn slugify_latin(text: &str, separator: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if is_slug_char(c) {
            if pending && !out.is_empty() {
                out.push_str(separator);
            }
            pending = false;
            out.push(c);
        } else {
            pending = true;
        }
    }
    out
}
