//! Language application: rewriting marked elements for a target language.
//!
//! Every element carrying the canonical marker attribute (`data-en`) is
//! translatable; its translations live in sibling attributes named after
//! each language code (`data-ru`, `data-he`, ...). Applying a language looks
//! the target attribute up on each marked element and replaces the element's
//! content when it is present, leaving the element alone when it is not.

use crate::dom::Document;
use crate::i18n::LanguageRegistry;
use tracing::debug;

/// How replacement content is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// The attribute value becomes a single text node; markup stays literal.
    Text,
    /// The attribute value is parsed as an HTML fragment.
    Markup,
}

/// Counts from one application pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Marked elements seen
    pub visited: usize,

    /// Elements whose content was replaced
    pub replaced: usize,

    /// Elements without a usable translation, left unchanged
    pub skipped: usize,
}

/// Attribute marking an element as translatable: `data-` + the canonical code.
pub fn marker_attribute() -> String {
    format!("data-{}", LanguageRegistry::get().canonical().code)
}

/// Attribute holding a language's content for an element.
///
/// Lowercased because the parser ASCII-lowercases attribute names, so
/// applying `"RU"` finds `data-ru` the way a browser's `getAttribute` would.
pub fn language_attribute(code: &str) -> String {
    format!("data-{}", code.to_ascii_lowercase())
}

/// Apply a language to every marked element of `document`.
///
/// The code is not validated here: an unknown code matches no attributes and
/// every element counts as skipped. An empty attribute value counts as
/// missing.
pub fn apply_language(document: &mut Document, code: &str, mode: ApplyMode) -> ApplyOutcome {
    let marker = marker_attribute();
    let target = language_attribute(code);
    let mut outcome = ApplyOutcome::default();

    for id in document.elements_with_attribute(&marker) {
        outcome.visited += 1;

        let translation = document
            .element(id)
            .and_then(|element| element.attribute(&target))
            .filter(|value| !value.is_empty())
            .map(str::to_owned);

        match translation {
            Some(content) => {
                match mode {
                    ApplyMode::Text => document.set_text_content(id, &content),
                    ApplyMode::Markup => document.set_markup_content(id, &content),
                }
                outcome.replaced += 1;
            }
            None => outcome.skipped += 1,
        }
    }

    debug!(
        "Applied '{}' in {:?} mode: {} replaced, {} skipped of {} visited",
        code, mode, outcome.replaced, outcome.skipped, outcome.visited
    );
    outcome
}
