//! Transliteration of Brahmic scripts (Devanagari, Kannada, Telugu) into
//! ITRANS-style Latin text.
//!
//! Consonants are romanized with a trailing inherent vowel marker (`ₐ`) that
//! a following vowel sign or virama removes:
//!
//! ```
//! use indic_itrans::{transliterate, EngineConfig};
//!
//! let config = EngineConfig::default();
//! assert_eq!(transliterate("नमस्ते", &config), "nₐmₐste");
//! assert_eq!(transliterate("plain text", &config), "plain text");
//! ```
//!
//! Each call is independent. A conjunct or a consonant + vowel sign pair that
//! the caller splits across two calls is not joined back together.

use std::borrow::Cow;

pub mod config;
pub mod constants;
pub mod registry;
pub mod script;
pub mod scripts;
pub mod table;
pub mod transliterator;

pub use config::{ConfigError, EngineConfig, MarkerStyle, OutputMode, SettingsMessage};
pub use registry::ScriptRegistry;
pub use script::ScriptId;
pub use table::{CodeRange, Entry, EntryKind, ScriptTable, TableError, TableSpec};
pub use transliterator::{Output, Segment, Transliterator};

/// Flat transliteration with the built-in tables.
pub fn transliterate<'t>(text: &'t str, config: &EngineConfig) -> Cow<'t, str> {
    Transliterator::builtin().transliterate(text, config)
}
