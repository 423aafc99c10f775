pub mod adapter;
pub mod detect;
mod global;
pub mod lang;
pub mod registry;
pub mod settings;
pub mod slug;
pub mod translit;
pub mod unicode;

pub use adapter::transliterate_function;
pub use global::{
    detect_language, get, get_available_language_codes, get_available_language_packs,
    get_setting, register, set_setting, slugify, slugify_with, translit, unregister,
};
pub use lang::{
    Direction, LanguagePack, LanguagePackBuilder, MappingEntry, PackError, PreProcessRule,
    ScriptBehaviour,
};
pub use registry::{Registry, RegistryError};
pub use settings::{Setting, SettingValue, Settings, SettingsError};
pub use translit::{TranslitError, Transliterator, TransliteratorBuilder};
