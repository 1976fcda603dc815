//! Entry validation.
//!
//! Checks run in a fixed order and the first failure is reported.

use crate::error::ValidationError;
use crate::item::Item;
use crate::quantity::parse_quantity;

/// A validated entry, ready to become an [`Item`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Validate raw form text against the items already in the list.
///
/// # Examples
/// ```
/// use shoplist_core::{validate_entry, ValidationError};
/// let entry = validate_entry(" Milk ", "2", "liter ", &[]).unwrap();
/// assert_eq!(entry.name, "Milk");
/// assert_eq!(validate_entry("Milk", "", "liter", &[]), Err(ValidationError::EmptyField));
/// ```
pub fn validate_entry(
    name: &str,
    quantity: &str,
    unit: &str,
    existing: &[Item],
) -> Result<ValidEntry, ValidationError> {
    let name = trim_form(name);
    let quantity_text = trim_form(quantity);
    let unit = trim_form(unit);

    if name.is_empty() || quantity_text.is_empty() || unit.is_empty() {
        return Err(ValidationError::EmptyField);
    }

    let quantity = parse_quantity(quantity_text).ok_or(ValidationError::InvalidQuantity)?;

    if has_whitespace_run(&format!("{quantity_text} {unit}")) {
        return Err(ValidationError::WhitespaceFormat);
    }

    if existing.iter().any(|item| item.has_name(name)) {
        return Err(ValidationError::DuplicateItem);
    }

    Ok(ValidEntry {
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
    })
}

/// Whitespace as browser form handling sees it.
///
/// Unicode `White_Space` plus the byte order mark U+FEFF, minus NEXT LINE
/// U+0085.
pub fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

/// Trim [form whitespace](is_form_whitespace) from both ends.
pub fn trim_form(text: &str) -> &str {
    text.trim_matches(is_form_whitespace)
}

/// Whether `text` contains two or more consecutive whitespace characters.
pub fn has_whitespace_run(text: &str) -> bool {
    let mut previous_was_space = false;
    for c in text.chars() {
        let is_space = is_form_whitespace(c);
        if is_space && previous_was_space {
            return true;
        }
        previous_was_space = is_space;
    }
    false
}
