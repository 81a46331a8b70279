//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides a centralized, extensible architecture for managing
//! the languages a page can be switched between. All language metadata and
//! language-related checks live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `coverage`: Translation coverage reporting over parsed documents
//!
//! # Example
//!
//! ```rust,ignore
//! use langswitch::i18n::{Language, LanguageRegistry};
//!
//! // Get canonical language (English)
//! let canonical = Language::canonical();
//!
//! // Create language from code
//! let russian = Language::from_code("ru")?;
//!
//! // List all enabled languages
//! let languages = LanguageRegistry::get().list_enabled();
//! ```

mod coverage;
mod language;
mod registry;

pub use coverage::{CoverageChecker, CoverageReport};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
