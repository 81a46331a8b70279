//! Language type: Flexible, validated language representation.
//!
//! This module provides the `Language` type, a small copyable value that is
//! guaranteed to name a supported, enabled language from the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
///
/// This type represents a language that has been validated against the registry.
/// It ensures that only supported, enabled languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ru")
    code: &'static str,
}

impl Language {
    /// Convenience constant for English, the canonical language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Convenience constant for Russian.
    pub const RUSSIAN: Language = Language { code: "ru" };

    /// Convenience constant for Hebrew.
    pub const HEBREW: Language = Language { code: "he" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "ru")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    ///
    /// # Example
    /// ```ignore
    /// let russian = Language::from_code("ru")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical (source) language.
    ///
    /// This is the language the page is authored in, and the one whose code
    /// names the marker attribute on translatable elements.
    ///
    /// # Returns
    /// The canonical Language (English).
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    ///
    /// # Returns
    /// The language code as a static string (e.g., "en", "ru").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Returns
    /// A reference to the `LanguageConfig` for this language.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    ///
    /// # Returns
    /// The language name in English (e.g., "English", "Russian").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    ///
    /// # Returns
    /// The language name in its native form (e.g., "English", "Русский").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    ///
    /// # Returns
    /// `true` if this is the source language, `false` if it's a translation target.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}
