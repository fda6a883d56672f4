//! Declarative form field descriptors.
//!
//! The field set serializes to a JSON description consumed by an external
//! renderer; this crate produces no markup. Labels are translation keys and
//! `class` values are opaque styling hints, both passed through unchanged.

use serde::Serialize;

/// Token submitted when a category is accepted.
pub const CHOICE_YES: &str = "true";
/// Token submitted when a category is declined.
pub const CHOICE_NO: &str = "false";

/// Label keys resolved by the host's localization layer.
pub const LABEL_YES: &str = "cookie_consent.yes";
pub const LABEL_NO: &str = "cookie_consent.no";
pub const LABEL_SAVE: &str = "cookie_consent.save";
pub const LABEL_CUSTOMIZE: &str = "cookie_consent.customize";
pub const LABEL_USE_ONLY_FUNCTIONAL: &str = "cookie_consent.use_only_functional_cookies";
pub const LABEL_USE_ALL: &str = "cookie_consent.use_all_cookies";

/// Styling hints for the submit actions.
pub const BUTTON_CLASS: &str = "btn cookie-consent__btn";
pub const BUTTON_CLASS_SECONDARY: &str = "btn cookie-consent__btn cookie-consent__btn--secondary";

/// Field names of the fixed submit actions.
pub const FIELD_SAVE: &str = "save";
pub const FIELD_CUSTOMIZE: &str = "customize";
pub const FIELD_USE_ONLY_FUNCTIONAL: &str = "use_only_functional_cookies";
pub const FIELD_USE_ALL: &str = "use_all_cookies";

/// One option of a choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

/// A binary single-select field for one cookie category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceField {
    /// Field key; the category identifier.
    pub name: String,
    /// Rendered as individual inputs rather than a select element.
    pub expanded: bool,
    /// Exactly one option may be active.
    pub multiple: bool,
    /// Pre-filled value derived from current consent state.
    pub initial: String,
    pub choices: Vec<Choice>,
}

/// A submit action with a label key and a styling hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitField {
    pub name: String,
    pub label: String,
    pub class: String,
}

/// A single entry of the field-set description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FormField {
    Choice(ChoiceField),
    Submit(SubmitField),
}

impl FormField {
    /// Field key as submitted by the renderer.
    pub fn name(&self) -> &str {
        match self {
            FormField::Choice(field) => &field.name,
            FormField::Submit(field) => &field.name,
        }
    }

    pub(crate) fn choice(name: &str, initial: &str) -> Self {
        FormField::Choice(ChoiceField {
            name: name.to_string(),
            expanded: true,
            multiple: false,
            initial: initial.to_string(),
            choices: vec![
                Choice {
                    label: LABEL_YES.to_string(),
                    value: CHOICE_YES.to_string(),
                },
                Choice {
                    label: LABEL_NO.to_string(),
                    value: CHOICE_NO.to_string(),
                },
            ],
        })
    }

    pub(crate) fn submit(name: &str, label: &str, class: &str) -> Self {
        FormField::Submit(SubmitField {
            name: name.to_string(),
            label: label.to_string(),
            class: class.to_string(),
        })
    }
}
