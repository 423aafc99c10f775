//! Language-code → pack registry.
//!
//! Registration order is preserved: detection breaks score ties in favour of
//! the earliest registered pack, and overwriting a pack keeps its slot.
use crate::lang::{
    LanguagePack, PackError,
    data::{BUILTIN_PACKS, builtin},
};
use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown language code `{0}`")]
    UnknownLanguage(String),

    #[error("language code `{0}` is already registered")]
    DuplicateCode(String),

    #[error(transparent)]
    Pack(#[from] PackError),
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    packs: Vec<Arc<LanguagePack>>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Empty registry; see [`Registry::with_builtins`] for the usual start.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.discover();
        registry
    }

    /// Registers every built-in pack whose code is not taken yet.
    /// Returns how many packs were added; repeated calls add nothing.
    pub fn discover(&mut self) -> usize {
        let mut added = 0;
        for data in BUILTIN_PACKS {
            if self.contains(data.code) {
                continue;
            }
            match data.build() {
                Ok(pack) => {
                    self.insert(Arc::new(pack));
                    added += 1;
                }
                Err(e) => tracing::error!("skipping built-in pack: {e}"),
            }
        }
        tracing::debug!(added, total = self.packs.len(), "discovered built-in language packs");
        added
    }

    /// Puts the built-in pack for `code` back, replacing any custom pack
    /// registered under it. Returns the replaced pack, if any.
    pub fn restore_builtin(
        &mut self,
        code: &str,
    ) -> Result<Option<Arc<LanguagePack>>, RegistryError> {
        let data = builtin(code).ok_or_else(|| RegistryError::UnknownLanguage(code.to_owned()))?;
        self.register(data.build()?, true)
    }

    /// Adds `pack` under its code. An existing code is an error unless
    /// `overwrite` is set, in which case the old pack is returned.
    pub fn register(
        &mut self,
        pack: impl Into<Arc<LanguagePack>>,
        overwrite: bool,
    ) -> Result<Option<Arc<LanguagePack>>, RegistryError> {
        let pack = pack.into();
        match self.index.get(pack.code()) {
            Some(_) if !overwrite => Err(RegistryError::DuplicateCode(pack.code().to_owned())),
            Some(&slot) => {
                tracing::warn!(code = pack.code(), "overwriting registered language pack");
                Ok(Some(std::mem::replace(&mut self.packs[slot], pack)))
            }
            None => {
                tracing::debug!(code = pack.code(), name = pack.name(), "registered language pack");
                self.insert(pack);
                Ok(None)
            }
        }
    }

    /// Removes a pack. Later packs move up one slot.
    pub fn unregister(&mut self, code: &str) -> Option<Arc<LanguagePack>> {
        let slot = self.index.remove(code)?;
        let removed = self.packs.remove(slot);
        for i in self.index.values_mut() {
            if *i > slot {
                *i -= 1;
            }
        }
        tracing::debug!(code, "unregistered language pack");
        Some(removed)
    }

    pub fn get(&self, code: &str) -> Result<&Arc<LanguagePack>, RegistryError> {
        self.index
            .get(code)
            .map(|&slot| &self.packs[slot])
            .ok_or_else(|| RegistryError::UnknownLanguage(code.to_owned()))
    }

    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn available_codes(&self) -> BTreeSet<String> {
        self.index.keys().cloned().collect()
    }

    /// Packs in registration order.
    #[inline]
    pub fn available_packs(&self) -> &[Arc<LanguagePack>] {
        &self.packs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    fn insert(&mut self, pack: Arc<LanguagePack>) {
        self.index.insert(pack.code().to_owned(), self.packs.len());
        self.packs.push(pack);
    }
}
