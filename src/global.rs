//! Process-wide default [`Transliterator`].
//!
//! Built lazily with the built-in packs. Registration and setting writes take
//! the write lock; everything else only reads. A poisoned lock is recovered,
//! since no operation leaves the registry half-updated.
use crate::{
    lang::{Direction, LanguagePack},
    settings::SettingValue,
    translit::{TranslitError, Transliterator},
};
use std::{
    collections::BTreeSet,
    sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

static DEFAULT: LazyLock<RwLock<Transliterator>> =
    LazyLock::new(|| RwLock::new(Transliterator::new()));

fn read() -> RwLockReadGuard<'static, Transliterator> {
    DEFAULT.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Transliterator> {
    DEFAULT.write().unwrap_or_else(PoisonError::into_inner)
}

/// Transliterates `text` with the pack registered under `language_code`.
/// `reversed` converts script → Latin.
pub fn translit(text: &str, language_code: &str, reversed: bool) -> Result<String, TranslitError> {
    Ok(read()
        .translit(text, language_code, Direction::from_reversed(reversed))?
        .into_owned())
}

pub fn detect_language(text: &str) -> Option<String> {
    read().detect_language(text).map(str::to_owned)
}

pub fn slugify(text: &str) -> String {
    read().slugify(text)
}

pub fn slugify_with(text: &str, separator: &str) -> String {
    read().slugify_with(text, separator)
}

pub fn get_available_language_codes() -> BTreeSet<String> {
    read().available_language_codes()
}

pub fn get_available_language_packs() -> Vec<Arc<LanguagePack>> {
    read().available_language_packs().to_vec()
}

pub fn register(pack: impl Into<Arc<LanguagePack>>, overwrite: bool) -> Result<(), TranslitError> {
    write().register(pack, overwrite)
}

pub fn unregister(code: &str) -> Option<Arc<LanguagePack>> {
    write().unregister(code)
}

pub fn get(code: &str) -> Result<Arc<LanguagePack>, TranslitError> {
    read().get(code).cloned()
}

pub fn get_setting(name: &str) -> Result<SettingValue, TranslitError> {
    read().get_setting(name)
}

/// Returns the replaced value so it can be restored.
pub fn set_setting(
    name: &str,
    value: impl Into<SettingValue>,
) -> Result<SettingValue, TranslitError> {
    write().set_setting(name, value)
}
