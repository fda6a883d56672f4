//! ConsentKit Core - category tree, consent configuration, error types.

pub mod category;
pub mod config;
pub mod error;

pub use category::{flatten, CategoryNode};
pub use config::ConsentConfig;
pub use error::{Error, Result};
