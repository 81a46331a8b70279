//! Translation coverage checks.
//!
//! Pages carry their translations as parallel `data-*` attributes written by
//! hand, and hand-written sets drift. An element gains a marker but never a
//! Hebrew value, or the selector offers a code no markup covers. The checker
//! walks a parsed page and reports every gap it finds.

use crate::apply::{language_attribute, marker_attribute};
use crate::control::{find_language_control, option_elements, option_value};
use crate::dom::Document;
use crate::i18n::LanguageRegistry;
use regex::Regex;
use std::sync::OnceLock;

/// Coverage report containing errors and warnings about a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Critical errors that break switching on this page
    pub errors: Vec<String>,

    /// Non-critical warnings about potential gaps
    pub warnings: Vec<String>,
}

impl CoverageReport {
    /// Create a new empty coverage report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for CoverageReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Checker for translation coverage of a page.
pub struct CoverageChecker;

// Regex pattern for language codes (cached for performance)
static CODE_REGEX: OnceLock<Regex> = OnceLock::new();

impl CoverageChecker {
    /// Check a parsed page for translation coverage gaps.
    ///
    /// This function checks that:
    /// - every marked element has a non-empty value for the marker attribute
    /// - every marked element carries a translation for each enabled language
    /// - the selection control offers exactly the registered language codes
    ///
    /// # Arguments
    /// * `document` - The parsed page to inspect
    ///
    /// # Returns
    /// A `CoverageReport` containing any errors or warnings found.
    pub fn check(document: &Document) -> CoverageReport {
        let mut report = CoverageReport::new();
        Self::check_elements(document, &mut report);
        Self::check_control(document, &mut report);
        report
    }

    /// Check every marked element for missing or empty translations.
    fn check_elements(document: &Document, report: &mut CoverageReport) {
        let registry = LanguageRegistry::get();
        let marker = marker_attribute();

        for (index, id) in document
            .elements_with_attribute(&marker)
            .into_iter()
            .enumerate()
        {
            let element = match document.element(id) {
                Some(element) => element,
                None => continue,
            };
            let label = format!("<{}> #{}", element.tag_name(), index + 1);

            if element
                .attribute(&marker)
                .map(str::is_empty)
                .unwrap_or(true)
            {
                report.errors.push(format!(
                    "{} has an empty '{}' value: switching back to {} blanks it",
                    label,
                    marker,
                    registry.canonical().code
                ));
            }

            for language in registry.list_enabled() {
                if language.code == registry.canonical().code {
                    continue;
                }
                let attribute = language_attribute(language.code);
                match element.attribute(&attribute) {
                    None => report.warnings.push(format!(
                        "{} has no '{}' translation ({})",
                        label, attribute, language.name
                    )),
                    Some(value) if value.is_empty() => report.warnings.push(format!(
                        "{} has an empty '{}' translation ({})",
                        label, attribute, language.name
                    )),
                    Some(_) => {}
                }
            }
        }
    }

    /// Check that the selection control and the registry offer the same codes.
    fn check_control(document: &Document, report: &mut CoverageReport) {
        // A page without a selector is fine; element coverage still applies.
        let control = match find_language_control(document) {
            Ok(control) => control,
            Err(_) => return,
        };

        let registry = LanguageRegistry::get();
        let regex = CODE_REGEX
            .get_or_init(|| Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

        let mut offered = Vec::new();
        for option in option_elements(document, control) {
            let value = option_value(document, option);
            if !regex.is_match(&value) {
                report.warnings.push(format!(
                    "Selector option '{}' is not a language code",
                    value
                ));
            } else if !registry.is_enabled(&value) {
                report.warnings.push(format!(
                    "Selector offers '{}' but no such language is registered",
                    value
                ));
            }
            offered.push(value);
        }

        for language in registry.list_enabled() {
            if !offered.iter().any(|code| code == language.code) {
                report.warnings.push(format!(
                    "Selector has no option for '{}' ({})",
                    language.code, language.name
                ));
            }
        }
    }
}
