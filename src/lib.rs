//! gtrans - async client for the simplified Google Translate page
//!
//! This library sends text to the `/m` web page of the translation service,
//! reads the translated text and the detected language out of the returned
//! HTML, and maps language names to and from ISO 639-1 codes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use core::{
    client::AsyncTranslator,
    config::TranslatorConfig,
    errors::{Result, TranslationError},
    languages::{code_for, name_for, LANGUAGES},
    models::{DetectedLanguage, Translated},
    session::{HttpSession, Transport},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
