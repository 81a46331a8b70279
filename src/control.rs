//! The page's language selection control.
//!
//! The page exposes one `<select>` inside an element with class
//! `language-switcher`. Helpers here locate it, keep its selected option in
//! line with the active language, and read its value back.

use crate::dom::Document;
use crate::error::SwitchError;
use indextree::NodeId;
use tracing::warn;

/// Class token on the element wrapping the selection control.
pub const CONTROL_CLASS: &str = "language-switcher";

/// Locate the selection control: the first `<select>` under an element
/// carrying the [`CONTROL_CLASS`] class token.
pub fn find_language_control(document: &Document) -> Result<NodeId, SwitchError> {
    for id in document.elements() {
        let wrapper = match document.element(id) {
            Some(element) if element.has_class(CONTROL_CLASS) => id,
            _ => continue,
        };
        for candidate in document.descendant_elements(wrapper) {
            if let Some(element) = document.element(candidate) {
                if element.tag_name() == "select" {
                    return Ok(candidate);
                }
            }
        }
    }
    Err(SwitchError::ControlNotFound)
}

/// Mark the option matching `code` as selected and clear the rest.
///
/// Returns whether any option matched. A miss is logged: the page would then
/// show a value other than the active language.
pub fn sync_control(document: &mut Document, control: NodeId, code: &str) -> bool {
    let mut matched = false;

    for option in option_elements(document, control) {
        let selected = option_value(document, option) == code;
        if let Some(element) = document.element_mut(option) {
            if selected {
                element.set_attribute("selected", "");
                matched = true;
            } else {
                element.remove_attribute("selected");
            }
        }
    }

    if !matched {
        warn!("Language control has no option for '{}'", code);
    }
    matched
}

/// Value the control currently shows: the selected option's value, or the
/// first option's when none is marked (the browser default).
pub fn control_value(document: &Document, control: NodeId) -> Option<String> {
    let options = option_elements(document, control);

    for &option in &options {
        let is_selected = document
            .element(option)
            .map(|element| element.has_attribute("selected"))
            .unwrap_or(false);
        if is_selected {
            return Some(option_value(document, option));
        }
    }

    options.first().map(|&option| option_value(document, option))
}

pub(crate) fn option_elements(document: &Document, control: NodeId) -> Vec<NodeId> {
    document
        .descendant_elements(control)
        .into_iter()
        .filter(|&id| {
            document
                .element(id)
                .map(|element| element.tag_name() == "option")
                .unwrap_or(false)
        })
        .collect()
}

/// An option's value: its `value` attribute, else its trimmed text.
pub(crate) fn option_value(document: &Document, option: NodeId) -> String {
    match document
        .element(option)
        .and_then(|element| element.attribute("value"))
    {
        Some(value) => value.to_string(),
        None => document.text_content(option).trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Document {
        Document::parse(html).expect("Should parse")
    }

    fn page_with_control() -> Document {
        parse(
            r#"<body>
                <nav class="language-switcher">
                    <select>
                        <option value="en">English</option>
                        <option value="ru">Русский</option>
                        <option value="he">עברית</option>
                    </select>
                </nav>
            </body>"#,
        )
    }

    // ==================== find_language_control Tests ====================

    #[test]
    fn test_find_control() {
        let document = page_with_control();
        let control = find_language_control(&document).expect("Should find control");
        assert_eq!(document.element(control).unwrap().tag_name(), "select");
    }

    #[test]
    fn test_find_control_missing() {
        let document = parse("<body><select><option>en</option></select></body>");
        let result = find_language_control(&document);
        assert!(matches!(result, Err(SwitchError::ControlNotFound)));
    }

    #[test]
    fn test_find_control_class_among_others() {
        let document = parse(
            r#"<body><div class="nav language-switcher dark"><select></select></div></body>"#,
        );
        assert!(find_language_control(&document).is_ok());
    }

    #[test]
    fn test_find_control_nested_deeper() {
        let document = parse(
            r#"<body><div class="language-switcher"><span><select></select></span></div></body>"#,
        );
        assert!(find_language_control(&document).is_ok());
    }

    // ==================== sync_control Tests ====================

    #[test]
    fn test_sync_marks_matching_option() {
        let mut document = page_with_control();
        let control = find_language_control(&document).expect("control");

        let matched = sync_control(&mut document, control, "ru");

        assert!(matched);
        assert_eq!(control_value(&document, control), Some("ru".to_string()));
    }

    #[test]
    fn test_sync_clears_previous_selection() {
        let mut document = parse(
            r#"<body><div class="language-switcher"><select>
                <option value="en" selected>English</option>
                <option value="he">עברית</option>
            </select></div></body>"#,
        );
        let control = find_language_control(&document).expect("control");

        sync_control(&mut document, control, "he");

        let options = option_elements(&document, control);
        assert!(!document
            .element(options[0])
            .unwrap()
            .has_attribute("selected"));
        assert!(document
            .element(options[1])
            .unwrap()
            .has_attribute("selected"));
    }

    #[test]
    fn test_sync_unknown_value_matches_nothing() {
        let mut document = page_with_control();
        let control = find_language_control(&document).expect("control");

        let matched = sync_control(&mut document, control, "fr");

        assert!(!matched);
        // first option still reported, as a browser would
        assert_eq!(control_value(&document, control), Some("en".to_string()));
    }

    // ==================== control_value Tests ====================

    #[test]
    fn test_control_value_defaults_to_first_option() {
        let document = page_with_control();
        let control = find_language_control(&document).expect("control");
        assert_eq!(control_value(&document, control), Some("en".to_string()));
    }

    #[test]
    fn test_control_value_without_options() {
        let document = parse(r#"<body><div class="language-switcher"><select></select></div></body>"#);
        let control = find_language_control(&document).expect("control");
        assert_eq!(control_value(&document, control), None);
    }

    #[test]
    fn test_option_value_falls_back_to_text() {
        let mut document = parse(
            r#"<body><div class="language-switcher"><select>
                <option>en</option>
                <option>ru</option>
            </select></div></body>"#,
        );
        let control = find_language_control(&document).expect("control");

        let matched = sync_control(&mut document, control, "ru");

        assert!(matched);
        assert_eq!(control_value(&document, control), Some("ru".to_string()));
    }
}
