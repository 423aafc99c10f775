//! Process-tunable parameters with defaults.
//!
//! Components read settings through [`Settings`] only, so a test can override
//! a value and restore it afterwards with the previous value `set` returns.
use std::{fmt, str::FromStr};
use thiserror::Error;

pub mod defaults {
    /// Detection stops scanning once any pack has this many hits.
    pub const LANGUAGE_DETECTION_MAX_NUM_KEYWORDS: usize = 10;
    pub const SLUG_SEPARATOR: &str = "-";
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown setting `{0}`")]
    UnknownSetting(String),

    #[error("invalid value for setting `{name}`: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    LanguageDetectionMaxNumKeywords,
    SlugSeparator,
}

impl Setting {
    pub const ALL: [Setting; 2] = [Setting::LanguageDetectionMaxNumKeywords, Setting::SlugSeparator];

    pub const fn name(self) -> &'static str {
        match self {
            Setting::LanguageDetectionMaxNumKeywords => "LANGUAGE_DETECTION_MAX_NUM_KEYWORDS",
            Setting::SlugSeparator => "SLUG_SEPARATOR",
        }
    }
}

impl FromStr for Setting {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Setting::ALL
            .into_iter()
            .find(|setting| setting.name() == s)
            .ok_or_else(|| SettingsError::UnknownSetting(s.to_owned()))
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Count(usize),
    Text(String),
}

impl From<usize> for SettingValue {
    fn from(n: usize) -> Self {
        SettingValue::Count(n)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Text(s.to_owned())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Text(s)
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Count(n) => write!(f, "{n}"),
            SettingValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    language_detection_max_num_keywords: usize,
    slug_separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language_detection_max_num_keywords: defaults::LANGUAGE_DETECTION_MAX_NUM_KEYWORDS,
            slug_separator: defaults::SLUG_SEPARATOR.to_owned(),
        }
    }
}

impl Settings {
    #[inline(always)]
    pub fn language_detection_max_num_keywords(&self) -> usize {
        self.language_detection_max_num_keywords
    }

    #[inline(always)]
    pub fn slug_separator(&self) -> &str {
        &self.slug_separator
    }

    /// Returns the previous value. Zero is rejected: detection would never
    /// look at the text.
    pub fn set_language_detection_max_num_keywords(
        &mut self,
        n: usize,
    ) -> Result<usize, SettingsError> {
        if n == 0 {
            return Err(SettingsError::InvalidValue {
                name: Setting::LanguageDetectionMaxNumKeywords.name(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(std::mem::replace(&mut self.language_detection_max_num_keywords, n))
    }

    pub fn set_slug_separator(&mut self, separator: impl Into<String>) -> String {
        std::mem::replace(&mut self.slug_separator, separator.into())
    }

    pub fn get(&self, name: &str) -> Result<SettingValue, SettingsError> {
        Ok(match name.parse::<Setting>()? {
            Setting::LanguageDetectionMaxNumKeywords => {
                SettingValue::Count(self.language_detection_max_num_keywords)
            }
            Setting::SlugSeparator => SettingValue::Text(self.slug_separator.clone()),
        })
    }

    /// Name-based setter; returns the value it replaced.
    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<SettingValue>,
    ) -> Result<SettingValue, SettingsError> {
        let setting = name.parse::<Setting>()?;
        let previous = match (setting, value.into()) {
            (Setting::LanguageDetectionMaxNumKeywords, SettingValue::Count(n)) => {
                SettingValue::Count(self.set_language_detection_max_num_keywords(n)?)
            }
            (Setting::SlugSeparator, SettingValue::Text(s)) => {
                SettingValue::Text(self.set_slug_separator(s))
            }
            (setting, value) => {
                return Err(SettingsError::InvalidValue {
                    name: setting.name(),
                    reason: format!("unexpected value {value}"),
                });
            }
        };
        tracing::debug!(setting = setting.name(), %previous, "setting overridden");
        Ok(previous)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
