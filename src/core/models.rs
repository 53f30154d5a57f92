//! Core data models for translation

use serde::Serialize;
use std::fmt;

use crate::core::errors::Result;
use crate::core::extractor::{extract, Extraction};

/// Outcome of one `translate` call
///
/// Every field is read out of the page once, when the value is built, and
/// only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translated {
    original: String,
    text: String,
    source: String,
    target: String,
}

impl Translated {
    /// Build a result from the input text and the page returned for it
    pub fn from_page(original: impl Into<String>, html: &str) -> Result<Self> {
        let Extraction {
            source,
            target,
            text,
        } = extract(html)?;

        Ok(Self {
            original: original.into(),
            text,
            source,
            target,
        })
    }

    /// The text that was sent for translation
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The translated text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Two-letter code of the source language as reported by the page
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Two-letter code of the target language as reported by the page
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Take the translated text out of the result
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Translated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Language reported by `detect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedLanguage {
    /// Language name from the table, e.g. "italian"
    pub name: String,
    /// Code as reported by the page, e.g. "it"
    pub code: String,
}

impl DetectedLanguage {
    /// Build from a name and a code
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for DetectedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
