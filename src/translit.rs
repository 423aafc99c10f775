use thiserror::Error;

use crate::{
    detect,
    lang::{Direction, LanguagePack, PackError, ScriptBehaviour},
    registry::{Registry, RegistryError},
    settings::{SettingValue, Settings, SettingsError},
    slug,
    unicode::validate_utf8,
};
use std::{borrow::Cow, collections::BTreeSet, sync::Arc};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslitError {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("pack error: {0}")]
    Pack(#[from] PackError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Registry plus settings: the context every operation runs against.
///
/// `Transliterator::default()` discovers the built-in packs; use
/// [`Transliterator::builder`] for an empty or customised instance.
#[derive(Debug, Clone)]
pub struct Transliterator {
    registry: Registry,
    settings: Settings,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterator {
    pub fn new() -> Self {
        Self {
            registry: Registry::with_builtins(),
            settings: Settings::default(),
        }
    }

    pub fn builder() -> TransliteratorBuilder {
        TransliteratorBuilder::default()
    }

    #[inline(always)]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline(always)]
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    #[inline(always)]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline(always)]
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    // ── Registry ────────────────────────────────────────────────────────
    pub fn register(
        &mut self,
        pack: impl Into<Arc<LanguagePack>>,
        overwrite: bool,
    ) -> Result<(), TranslitError> {
        self.registry.register(pack, overwrite)?;
        Ok(())
    }

    pub fn unregister(&mut self, code: &str) -> Option<Arc<LanguagePack>> {
        self.registry.unregister(code)
    }

    /// See [`Registry::restore_builtin`].
    pub fn restore_builtin(&mut self, code: &str) -> Result<(), TranslitError> {
        self.registry.restore_builtin(code)?;
        Ok(())
    }

    pub fn get(&self, code: &str) -> Result<&Arc<LanguagePack>, TranslitError> {
        Ok(self.registry.get(code)?)
    }

    pub fn available_language_codes(&self) -> BTreeSet<String> {
        self.registry.available_codes()
    }

    pub fn available_language_packs(&self) -> &[Arc<LanguagePack>] {
        self.registry.available_packs()
    }

    // ── Transliteration ────────────────────────────────────────────────
    pub fn translit<'a>(
        &self,
        text: &'a str,
        language_code: &str,
        direction: Direction,
    ) -> Result<Cow<'a, str>, TranslitError> {
        let pack = self.registry.get(language_code)?;
        if text.is_empty() {
            return Ok(Cow::Borrowed(text));
        }
        Ok(pack.translate_string(text, direction))
    }

    /// Like [`translit`](Self::translit) for raw bytes; invalid UTF-8 is
    /// rejected before any conversion happens.
    pub fn translit_bytes<'a>(
        &self,
        bytes: &'a [u8],
        language_code: &str,
        direction: Direction,
    ) -> Result<Cow<'a, str>, TranslitError> {
        let text = validate_utf8(bytes).map_err(TranslitError::InvalidInput)?;
        self.translit(text, language_code, direction)
    }

    // ── Detection & slugs ──────────────────────────────────────────────
    pub fn detect_language(&self, text: &str) -> Option<&str> {
        self.detect_language_with(text, self.settings.language_detection_max_num_keywords())
    }

    pub fn detect_language_with(&self, text: &str, max_keywords: usize) -> Option<&str> {
        detect::detect_language(&self.registry, text, max_keywords).map(|p| p.code())
    }

    pub fn slugify(&self, text: &str) -> String {
        self.slugify_with(text, self.settings.slug_separator())
    }

    pub fn slugify_with(&self, text: &str, separator: &str) -> String {
        slug::slugify(
            &self.registry,
            text,
            separator,
            self.settings.language_detection_max_num_keywords(),
        )
    }

    pub fn slugify_bytes(&self, bytes: &[u8], separator: &str) -> Result<String, TranslitError> {
        let text = validate_utf8(bytes).map_err(TranslitError::InvalidInput)?;
        Ok(self.slugify_with(text, separator))
    }

    // ── Settings ───────────────────────────────────────────────────────
    pub fn get_setting(&self, name: &str) -> Result<SettingValue, TranslitError> {
        Ok(self.settings.get(name)?)
    }

    /// Returns the replaced value so callers can restore it.
    pub fn set_setting(
        &mut self,
        name: &str,
        value: impl Into<SettingValue>,
    ) -> Result<SettingValue, TranslitError> {
        Ok(self.settings.set(name, value)?)
    }
}

#[derive(Debug, Default)]
pub struct TransliteratorBuilder {
    skip_builtins: bool,
    packs: Vec<(Arc<LanguagePack>, bool)>,
    settings: Settings,
}

impl TransliteratorBuilder {
    /// Start from an empty registry instead of the built-in packs.
    pub fn without_builtins(mut self) -> Self {
        self.skip_builtins = true;
        self
    }

    pub fn pack(mut self, pack: impl Into<Arc<LanguagePack>>) -> Self {
        self.packs.push((pack.into(), false));
        self
    }

    /// Register `pack`, replacing a built-in or earlier pack of the same code.
    pub fn replace_pack(mut self, pack: impl Into<Arc<LanguagePack>>) -> Self {
        self.packs.push((pack.into(), true));
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> Result<Transliterator, TranslitError> {
        let mut registry = if self.skip_builtins {
            Registry::new()
        } else {
            Registry::with_builtins()
        };
        for (pack, overwrite) in self.packs {
            registry.register(pack, overwrite)?;
        }
        Ok(Transliterator {
            registry,
            settings: self.settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATIN: &str = "Lorem ipsum dolor sit amet";

    fn example() -> LanguagePack {
        LanguagePack::builder("example", "Example")
            .mapping("abcdefghij", "1234567890")
            .build()
            .unwrap()
    }

    #[test]
    fn test_unknown_language() {
        let t = Transliterator::new();
        assert_eq!(
            t.translit(LATIN, "xx", Direction::Forward).unwrap_err(),
            TranslitError::Registry(RegistryError::UnknownLanguage("xx".into()))
        );
    }

    #[test]
    fn test_empty_input() {
        let t = Transliterator::new();
        assert_eq!(t.translit("", "hy", Direction::Forward).unwrap(), "");
        // the code is still checked
        assert!(t.translit("", "xx", Direction::Forward).is_err());
    }

    #[test]
    fn test_invalid_bytes_rejected() {
        let t = Transliterator::new();
        let err = t
            .translit_bytes(b"Lorem \xFF", "ru", Direction::Forward)
            .unwrap_err();
        assert_eq!(
            err,
            TranslitError::InvalidInput("invalid UTF-8 at byte 6".into())
        );
        assert!(t.slugify_bytes(b"\xC0", "-").is_err());
    }

    #[test]
    fn test_valid_bytes() {
        let t = Transliterator::new();
        assert_eq!(
            t.translit_bytes(LATIN.as_bytes(), "ru", Direction::Forward).unwrap(),
            "Лорем ипсум долор сит амет"
        );
        assert_eq!(
            t.slugify_bytes("Лорем ипсум".as_bytes(), "_").unwrap(),
            "lorem_ipsum"
        );
    }

    #[test]
    fn test_builder_custom_pack() {
        let t = Transliterator::builder().pack(example()).build().unwrap();
        assert_eq!(t.available_language_codes().len(), 4);
        assert_eq!(
            t.translit(LATIN, "example", Direction::Forward).unwrap(),
            "Lor5m 9psum 4olor s9t 1m5t"
        );
    }

    #[test]
    fn test_builder_without_builtins() {
        let t = Transliterator::builder()
            .without_builtins()
            .pack(example())
            .build()
            .unwrap();
        let codes: Vec<_> = t.available_language_codes().into_iter().collect();
        assert_eq!(codes, ["example"]);
    }

    #[test]
    fn test_builder_duplicate_fails() {
        let err = Transliterator::builder()
            .pack(example())
            .pack(example())
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TranslitError::Registry(RegistryError::DuplicateCode("example".into()))
        );
    }

    #[test]
    fn test_builder_replace_pack() {
        let digits = LanguagePack::builder("ru", "Digits").mapping("a", "1").build().unwrap();
        let t = Transliterator::builder().replace_pack(digits).build().unwrap();
        assert_eq!(t.translit("ab", "ru", Direction::Forward).unwrap(), "1b");
    }

    #[test]
    fn test_restore_builtin_undoes_replacement() {
        let digits = LanguagePack::builder("ru", "Digits").mapping("a", "1").build().unwrap();
        let mut t = Transliterator::builder().replace_pack(digits).build().unwrap();
        t.restore_builtin("ru").unwrap();
        assert_eq!(t.translit("ab", "ru", Direction::Forward).unwrap(), "аб");
    }

    #[test]
    fn test_settings_drive_slug_separator() {
        let mut t = Transliterator::new();
        t.set_setting("SLUG_SEPARATOR", "_").unwrap();
        assert_eq!(t.slugify("Лорем ипсум"), "lorem_ipsum");
        assert_eq!(t.slugify_with("Лорем ипсум", "."), "lorem.ipsum");
    }

    #[test]
    fn test_detect_respects_setting() {
        let mut t = Transliterator::new();
        let mixed = "ամետ Лорем ипсум";
        assert_eq!(t.detect_language(mixed), Some("ru"));
        t.set_setting("LANGUAGE_DETECTION_MAX_NUM_KEYWORDS", 2usize).unwrap();
        assert_eq!(t.detect_language(mixed), Some("hy"));
    }

    #[test]
    fn test_unknown_setting_error() {
        let t = Transliterator::new();
        assert_eq!(
            t.get_setting("MISSING").unwrap_err().to_string(),
            "settings error: unknown setting `MISSING`"
        );
    }
}
