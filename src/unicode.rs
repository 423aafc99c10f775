use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use std::{borrow::Cow, sync::LazyLock};

// ── ICU4X ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// Canonical composition (NFC). Zero-copy when the text is already composed.
#[inline]
pub fn compose_nfc(text: Cow<'_, str>) -> Cow<'_, str> {
    if ICU4X_NFC.is_normalized(&text) {
        return text;
    }
    Cow::Owned(ICU4X_NFC.normalize(&text).into_owned())
}

/// SIMD-accelerated UTF-8 validation. The error message carries the offset of
/// the first invalid byte.
#[inline]
pub fn validate_utf8(bytes: &[u8]) -> Result<&str, String> {
    simdutf8::compat::from_utf8(bytes)
        .map_err(|e| format!("invalid UTF-8 at byte {}", e.valid_up_to()))
}

/// Characters kept verbatim in a slug.
#[inline(always)]
pub const fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_normalization::UnicodeNormalization;

    #[test]
    fn test_compose_decomposed_short_i() {
        let decomposed: String = "й".nfd().collect();
        assert_eq!(decomposed.chars().count(), 2);
        assert_eq!(compose_nfc(Cow::Owned(decomposed)), "й");
    }

    #[test]
    fn test_compose_matches_reference() {
        for s in ["cafe\u{0301}", "ё", "Ё", "е\u{0308}лка", "plain"] {
            let expected: String = s.nfc().collect();
            assert_eq!(compose_nfc(Cow::Borrowed(s)), expected);
        }
    }

    #[test]
    fn test_compose_zero_copy() {
        let input = "Лорем ипсум";
        assert!(matches!(
            compose_nfc(Cow::Borrowed(input)),
            Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()
        ));
    }

    #[test]
    fn test_validate_utf8() {
        assert_eq!(validate_utf8("ամետ".as_bytes()), Ok("ամետ"));
        assert_eq!(
            validate_utf8(b"ab\xFFcd"),
            Err("invalid UTF-8 at byte 2".to_string())
        );
    }

    #[test]
    fn test_slug_chars() {
        assert!(is_slug_char('a'));
        assert!(is_slug_char('7'));
        assert!(!is_slug_char('A'));
        assert!(!is_slug_char('-'));
        assert!(!is_slug_char('é'));
    }
}
