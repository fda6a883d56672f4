//! Consent form construction and bulk-accept payload rewriting.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use consentkit_core::category::{flatten, CategoryNode};
use consentkit_core::config::{ConsentConfig, DEFAULT_TRANSLATION_DOMAIN};

use crate::checker::ConsentChecker;
use crate::fields::{
    ChoiceField, FormField, BUTTON_CLASS, BUTTON_CLASS_SECONDARY, CHOICE_NO, CHOICE_YES,
    FIELD_CUSTOMIZE, FIELD_SAVE, FIELD_USE_ALL, FIELD_USE_ONLY_FUNCTIONAL, LABEL_CUSTOMIZE,
    LABEL_SAVE, LABEL_USE_ALL, LABEL_USE_ONLY_FUNCTIONAL,
};

/// Builds the cookie consent form for one request.
///
/// The category tree and presentation mode are fixed at construction; the
/// flattened category list is computed once and reused. The consent lookup
/// runs once per category on each [`ConsentFormBuilder::build`] call.
pub struct ConsentFormBuilder {
    checker: Arc<dyn ConsentChecker>,
    categories_flat: Vec<String>,
    simplified: bool,
    translation_domain: String,
}

impl ConsentFormBuilder {
    pub fn new(
        checker: Arc<dyn ConsentChecker>,
        categories: Vec<CategoryNode>,
        simplified: bool,
    ) -> Self {
        let categories_flat = flatten(&categories);
        Self {
            checker,
            categories_flat,
            simplified,
            translation_domain: DEFAULT_TRANSLATION_DOMAIN.to_string(),
        }
    }

    /// Construct from a loaded [`ConsentConfig`].
    pub fn from_config(checker: Arc<dyn ConsentChecker>, config: &ConsentConfig) -> Self {
        Self::new(checker, config.categories.clone(), config.simplified)
            .with_translation_domain(config.translation_domain.clone())
    }

    /// Override the translation domain handed to the localization layer.
    pub fn with_translation_domain(mut self, domain: impl Into<String>) -> Self {
        self.translation_domain = domain.into();
        self
    }

    pub fn translation_domain(&self) -> &str {
        &self.translation_domain
    }

    /// Flattened category identifiers in field order.
    pub fn categories(&self) -> &[String] {
        &self.categories_flat
    }

    pub fn is_simplified(&self) -> bool {
        self.simplified
    }

    /// Assemble the field set, pre-filled from the current consent state.
    ///
    /// Category fields come first in flattened order, then the submit
    /// actions. In simplified mode the `save` and `customize` actions are
    /// omitted; the functional-only and accept-all actions are always
    /// present.
    pub fn build(&self) -> ConsentForm {
        let mut fields = Vec::with_capacity(self.categories_flat.len() + 4);

        for category in &self.categories_flat {
            let initial = if self.checker.is_category_allowed(category) {
                CHOICE_YES
            } else {
                CHOICE_NO
            };
            fields.push(FormField::choice(category, initial));
        }

        if !self.simplified {
            fields.push(FormField::submit(FIELD_SAVE, LABEL_SAVE, BUTTON_CLASS));
            fields.push(FormField::submit(FIELD_CUSTOMIZE, LABEL_CUSTOMIZE, BUTTON_CLASS));
        }

        fields.push(FormField::submit(
            FIELD_USE_ONLY_FUNCTIONAL,
            LABEL_USE_ONLY_FUNCTIONAL,
            BUTTON_CLASS,
        ));
        fields.push(FormField::submit(
            FIELD_USE_ALL,
            LABEL_USE_ALL,
            BUTTON_CLASS_SECONDARY,
        ));

        debug!("Built consent form with {} fields", fields.len());

        ConsentForm {
            translation_domain: self.translation_domain.clone(),
            simplified: self.simplified,
            fields,
        }
    }

    /// Apply the bulk-accept override to a submitted payload.
    ///
    /// The host calls this before binding fields. Presence of the
    /// `use_all_cookies` key, regardless of its value, forces every
    /// category to accepted.
    pub fn rewrite_payload(&self, payload: HashMap<String, String>) -> HashMap<String, String> {
        rewrite_payload(payload, FIELD_USE_ALL, &self.categories_flat)
    }
}

/// Force every category key to accepted when the trigger key is present.
///
/// Keys outside `category_keys` are left untouched; without the trigger the
/// payload passes through unmodified. Category keys absent from the payload
/// are inserted.
pub fn rewrite_payload(
    mut payload: HashMap<String, String>,
    trigger_key: &str,
    category_keys: &[String],
) -> HashMap<String, String> {
    if !payload.contains_key(trigger_key) {
        return payload;
    }

    debug!(
        "Bulk accept: forcing {} categories to accepted",
        category_keys.len()
    );
    for category in category_keys {
        payload.insert(category.clone(), CHOICE_YES.to_string());
    }
    payload
}

/// The ordered field-set description handed to an external renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ConsentForm {
    /// Translation domain for resolving label keys.
    pub translation_domain: String,
    /// Whether the per-category controls were suppressed.
    pub simplified: bool,
    /// Fields in render order.
    pub fields: Vec<FormField>,
}

impl ConsentForm {
    /// Look up a field by its key.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn is_simplified(&self) -> bool {
        self.simplified
    }

    /// The per-category choice fields, in flattened order.
    pub fn category_fields(&self) -> impl Iterator<Item = &ChoiceField> {
        self.fields.iter().filter_map(|field| match field {
            FormField::Choice(choice) => Some(choice),
            FormField::Submit(_) => None,
        })
    }
}
