//! Attribute-driven language switching for HTML documents.
//!
//! Pages author their translations inline: every translatable element
//! carries a `data-en` marker holding the English content plus one
//! `data-<code>` attribute per translation (`data-ru`, `data-he`). This
//! crate parses such a page, switches it between languages, keeps the
//! page's selection control in step, and persists the choice so the next
//! load comes up in the reader's language.
//!
//! # Architecture
//!
//! - `dom`: HTML parsing, querying, mutation, and serialization
//! - `i18n`: Language registry, the `Language` type, and coverage checks
//! - `apply`: Rewriting marked elements from their translation attributes
//! - `control`: Locating and syncing the page's `<select>` control
//! - `store`: Persistence seam for the selection (file-backed or in-memory)
//! - `switcher`: Load-time initialization and selection handling
//! - `config`: Runtime configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use langswitch::{ApplyMode, Document, LanguageSwitcher, MemoryStore, SwitcherConfig};
//!
//! let mut document = Document::parse(html)?;
//! let mut switcher = LanguageSwitcher::new(SwitcherConfig::default(), MemoryStore::new());
//!
//! // Bring the page up in the persisted (or default) language
//! switcher.initialize(&mut document);
//!
//! // The reader picks Hebrew
//! switcher.change_language(&mut document, "he", ApplyMode::Text)?;
//!
//! let switched = document.to_html();
//! ```

pub mod apply;
pub mod config;
pub mod control;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod store;
pub mod switcher;

pub use apply::{apply_language, ApplyMode, ApplyOutcome};
pub use config::SwitcherConfig;
pub use dom::Document;
pub use error::SwitchError;
pub use i18n::{CoverageChecker, CoverageReport, Language, LanguageConfig, LanguageRegistry};
pub use store::{FileStore, MemoryStore, SelectionStore};
pub use switcher::{InitReport, LanguageSwitcher};
