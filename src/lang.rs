pub(crate) mod behaviour;
pub mod data;
pub mod table;

pub use behaviour::ScriptBehaviour;
pub use table::{Direction, MappingEntry, MappingTable, PreProcessRule};

use thiserror::Error;

/// Rejected pack definitions. Raised by [`LanguagePackBuilder::build`], so a
/// malformed pack can never reach a registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PackError {
    #[error("malformed language pack `{code}`: {reason}")]
    Malformed { code: String, reason: String },
}

/// A named bundle of mapping data for one script. Immutable once built.
#[derive(Debug, Clone)]
pub struct LanguagePack {
    code: String,
    name: String,
    table: MappingTable,
}

impl LanguagePack {
    pub fn builder(code: impl Into<String>, name: impl Into<String>) -> LanguagePackBuilder {
        LanguagePackBuilder::new(code, name)
    }

    #[inline(always)]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn table(&self) -> &MappingTable {
        &self.table
    }
}

/// Collects the two parallel mapping sides plus the optional rule sets.
///
/// ```
/// use transliterate::{LanguagePack, ScriptBehaviour, Direction};
///
/// let pack = LanguagePack::builder("example", "Example")
///     .mapping("abcdefghij", "1234567890")
///     .build()
///     .unwrap();
/// assert_eq!(pack.translate_string("jab", Direction::Forward), "012");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LanguagePackBuilder {
    code: String,
    name: String,
    latin: Vec<String>,
    script: Vec<String>,
    pre_rules: Vec<PreProcessRule>,
    reverse_overrides: Vec<MappingEntry>,
    compose: bool,
}

impl LanguagePackBuilder {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Character-wise parallel sides: the i-th char of `latin` pairs with the
    /// i-th char of `script`.
    pub fn mapping(mut self, latin: &str, script: &str) -> Self {
        self.latin.extend(latin.chars().map(String::from));
        self.script.extend(script.chars().map(String::from));
        self
    }

    /// Unit-wise parallel sides, for multi-character sequences.
    pub fn units<L, S>(mut self, latin: &[L], script: &[S]) -> Self
    where
        L: AsRef<str>,
        S: AsRef<str>,
    {
        self.latin.extend(latin.iter().map(|u| u.as_ref().to_owned()));
        self.script.extend(script.iter().map(|u| u.as_ref().to_owned()));
        self
    }

    pub fn pair(mut self, latin: impl Into<String>, script: impl Into<String>) -> Self {
        self.latin.push(latin.into());
        self.script.push(script.into());
        self
    }

    pub fn pre_rule(
        mut self,
        direction: Direction,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.pre_rules.push(PreProcessRule {
            direction,
            pattern: pattern.into(),
            replacement: replacement.into(),
        });
        self
    }

    /// Reverse-only pair: `script` decodes to `latin`, ahead of any table
    /// entry of the same length.
    pub fn reverse_override(mut self, script: impl Into<String>, latin: impl Into<String>) -> Self {
        self.reverse_overrides.push(MappingEntry {
            latin: latin.into(),
            script: script.into(),
        });
        self
    }

    /// NFC-compose input before mapping.
    pub fn compose(mut self, compose: bool) -> Self {
        self.compose = compose;
        self
    }

    pub fn build(self) -> Result<LanguagePack, PackError> {
        let malformed = |reason: String| PackError::Malformed {
            code: self.code.clone(),
            reason,
        };

        if self.code.trim().is_empty() {
            return Err(malformed("language code is empty".into()));
        }
        if self.latin.len() != self.script.len() {
            return Err(malformed(format!(
                "mapping sides differ in length: {} latin units vs {} script units",
                self.latin.len(),
                self.script.len()
            )));
        }
        if let Some(i) = self.latin.iter().position(String::is_empty) {
            return Err(malformed(format!("empty latin unit at index {i}")));
        }
        if let Some(i) = self.script.iter().position(String::is_empty) {
            return Err(malformed(format!("empty script unit at index {i}")));
        }
        if let Some(i) = self.pre_rules.iter().position(|r| r.pattern.is_empty()) {
            return Err(malformed(format!("empty pre-process pattern at index {i}")));
        }
        if let Some(i) = self
            .reverse_overrides
            .iter()
            .position(|e| e.latin.is_empty() || e.script.is_empty())
        {
            return Err(malformed(format!("empty reverse override at index {i}")));
        }

        let entries = self
            .latin
            .into_iter()
            .zip(self.script)
            .map(|(latin, script)| MappingEntry { latin, script })
            .collect();
        let table = MappingTable::compile(
            entries,
            self.pre_rules,
            self.reverse_overrides,
            self.compose,
        );

        Ok(LanguagePack {
            code: self.code,
            name: self.name,
            table,
        })
    }
}
