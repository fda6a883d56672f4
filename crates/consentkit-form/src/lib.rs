//! Cookie consent form component.
//!
//! Derives a flat set of per-category choice fields from a nested category
//! tree, pre-fills each field from the host's current consent state, and
//! rewrites submissions when the bulk accept action is used. Rendering,
//! localization catalogs, cookie reading, and persistence of decisions all
//! stay with the host.

pub mod checker;
pub mod fields;
pub mod form;

pub use checker::{ConsentChecker, ConsentState};
pub use fields::{Choice, ChoiceField, FormField, SubmitField};
pub use form::{rewrite_payload, ConsentForm, ConsentFormBuilder};
