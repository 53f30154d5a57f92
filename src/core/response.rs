//! Raw endpoint responses and status classification

use crate::core::errors::{Result, TranslationError};

/// Status code and body of one endpoint response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    /// Build a response from its parts
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Decide whether a response status can go on to extraction.
///
/// No retry happens here or anywhere else in the crate.
pub fn classify(status: u16) -> Result<()> {
    match status {
        200 => Ok(()),
        429 => Err(TranslationError::RateLimited),
        status => Err(TranslationError::RequestFailed { status }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_status() {
        assert!(classify(200).is_ok());
    }

    #[test]
    fn test_rate_limited() {
        assert!(matches!(classify(429), Err(TranslationError::RateLimited)));
    }

    #[test]
    fn test_every_other_status_fails() {
        for status in (100..600).filter(|s| *s != 200 && *s != 429) {
            match classify(status) {
                Err(TranslationError::RequestFailed { status: s }) => assert_eq!(s, status),
                other => panic!("unexpected result for {}: {:?}", status, other),
            }
        }
    }
}
