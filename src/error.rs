//! Typed error conditions of the switching flow.

use thiserror::Error;

/// Domain errors surfaced to embedders.
///
/// Infrastructure failures (I/O, malformed persisted state) travel as
/// `anyhow::Error` with context; the variants here are conditions an
/// embedder is expected to branch on.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// The document has no `<select>` under a `language-switcher`-classed
    /// element.
    #[error("No language control found: expected a <select> inside an element with class \"language-switcher\"")]
    ControlNotFound,

    /// Strict mode rejected a code the registry does not know.
    #[error("Unknown or disabled language code '{code}'")]
    UnknownLanguage { code: String },
}
