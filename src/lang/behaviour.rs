use crate::lang::{Direction, LanguagePack, MappingTable};
use std::borrow::Cow;

/// ---------------------------------------------------------------------------
/// ScriptBehaviour – everything a pack can do, derived from its table
/// ---------------------------------------------------------------------------
pub trait ScriptBehaviour {
    fn code(&self) -> &str;
    fn name(&self) -> &str;
    fn table(&self) -> &MappingTable;

    // -------------------------------------------------------------------------
    // Unit translation
    // -------------------------------------------------------------------------

    /// Counterpart of a single unit, or the unit itself when unmapped.
    #[inline]
    fn translate_unit<'a>(&'a self, unit: &'a str, direction: Direction) -> &'a str {
        self.table().lookup(unit, direction).unwrap_or(unit)
    }

    #[inline(always)]
    fn forward<'a>(&'a self, unit: &'a str) -> &'a str {
        self.translate_unit(unit, Direction::Forward)
    }

    #[inline(always)]
    fn reverse<'a>(&'a self, unit: &'a str) -> &'a str {
        self.translate_unit(unit, Direction::Reverse)
    }

    // -------------------------------------------------------------------------
    // String translation
    // -------------------------------------------------------------------------
    #[inline]
    fn translate_string<'a>(&self, text: &'a str, direction: Direction) -> Cow<'a, str> {
        self.table().translate(text, direction)
    }

    // -------------------------------------------------------------------------
    // Alphabet helpers (detection)
    // -------------------------------------------------------------------------
    #[inline(always)]
    fn alphabet(&self) -> &[char] {
        self.table().alphabet()
    }

    #[inline(always)]
    fn contains(&self, c: char) -> bool {
        self.alphabet().binary_search(&c).is_ok()
    }

    /// A pack whose script side is pure ASCII needs no romanization.
    #[inline]
    fn is_latin_script(&self) -> bool {
        self.alphabet().iter().all(char::is_ascii)
    }

    /// Alphabet hits in `text`, counting stops at `cap`.
    #[inline]
    fn count_script_chars(&self, text: &str, cap: usize) -> usize {
        text.chars().filter(|&c| self.contains(c)).take(cap).count()
    }
}

impl ScriptBehaviour for LanguagePack {
    #[inline(always)]
    fn code(&self) -> &str {
        LanguagePack::code(self)
    }

    #[inline(always)]
    fn name(&self) -> &str {
        LanguagePack::name(self)
    }

    #[inline(always)]
    fn table(&self) -> &MappingTable {
        LanguagePack::table(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> LanguagePack {
        LanguagePack::builder("example", "Example")
            .mapping("abcdefghij", "1234567890")
            .build()
            .unwrap()
    }

    #[test]
    fn test_unit_round_trip() {
        let pack = example();
        assert_eq!(pack.forward("a"), "1");
        assert_eq!(pack.reverse("0"), "j");
    }

    #[test]
    fn test_unit_identity_fallback() {
        let pack = example();
        assert_eq!(pack.forward("z"), "z");
        assert_eq!(pack.forward("A"), "A"); // case-sensitive
        assert_eq!(pack.reverse("."), ".");
        assert_eq!(pack.forward("ab"), "ab"); // not a declared unit
    }

    #[test]
    fn test_alphabet_helpers() {
        let pack = example();
        assert!(pack.contains('7'));
        assert!(!pack.contains('a'));
        assert!(pack.is_latin_script());
        assert_eq!(pack.count_script_chars("a1b2 c3", usize::MAX), 3);
        assert_eq!(pack.count_script_chars("a1b2 c3", 2), 2);
    }

    #[test]
    fn test_trait_object_dispatch() {
        let pack = example();
        let dynamic: &dyn ScriptBehaviour = &pack;
        assert_eq!(dynamic.code(), "example");
        assert_eq!(dynamic.name(), "Example");
        assert_eq!(dynamic.translate_string("hi", Direction::Forward), "89");
    }
}
