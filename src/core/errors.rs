//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Input is not valid UTF-8 text
    #[error("Text must be valid UTF-8: {message}")]
    InvalidType {
        /// Decoder error
        message: String,
    },

    /// Input is longer than the configured limit
    #[error("Maximum length exceeded: {length} (text) --> {limit} (limit)")]
    LengthExceeded {
        /// Length of the input in characters
        length: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Input is empty
    #[error("The text is empty")]
    EmptyInput,

    /// Language selector not present in the language table
    #[error("No support for the provided language: '{language}'")]
    UnsupportedLanguage {
        /// The rejected selector or code
        language: String,
    },

    /// Source and target resolve to the same language
    #[error("The source and the target can't be the same: '{source_lang}' (source) --> '{target_lang}' (target)")]
    SameSourceTarget {
        /// Source selector as given
        source_lang: String,
        /// Target selector as given
        target_lang: String,
    },

    /// Endpoint answered 429
    #[error("Too many requests (service quota: 5 req/sec and 200k req/day)")]
    RateLimited,

    /// Endpoint answered with a status other than 200 or 429
    #[error("Request failed with status {status}, try again and check your connection")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// Response page does not have the expected shape
    #[error("Could not extract translation: {message}")]
    ExtractionFailed {
        /// What was missing from the page
        message: String,
    },

    /// Transport failed before a status was received
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport error text
        message: String,
    },

    /// Translator or session already closed
    #[error("Session is closed")]
    SessionClosed,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
