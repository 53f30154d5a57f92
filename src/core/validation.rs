//! Input checks that run before any request is sent

use crate::core::errors::{Result, TranslationError};

/// Default maximum input length, in characters
pub const DEFAULT_MAX_LENGTH: usize = 5000;

/// Check that `text` is non-empty and at most `limit` characters long.
///
/// Length is counted in Unicode scalar values, not bytes.
pub fn validate_input(text: &str, limit: usize) -> Result<()> {
    let length = text.chars().count();

    if length > limit {
        return Err(TranslationError::LengthExceeded { length, limit });
    }

    if length == 0 {
        return Err(TranslationError::EmptyInput);
    }

    Ok(())
}

/// Interpret raw bytes as text
pub fn decode_input(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| TranslationError::InvalidType {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_text_within_limit() {
        assert!(validate_input("a", 10).is_ok());
        assert!(validate_input("0123456789", 10).is_ok());
        assert!(validate_input(&"x".repeat(DEFAULT_MAX_LENGTH), DEFAULT_MAX_LENGTH).is_ok());
    }

    #[test]
    fn test_rejects_text_over_limit() {
        let err = validate_input("01234567890", 10).unwrap_err();
        assert!(matches!(
            err,
            TranslationError::LengthExceeded { length: 11, limit: 10 }
        ));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 4 characters, 12 bytes
        assert!(validate_input("日本語だ", 4).is_ok());
        assert!(validate_input("日本語だ", 3).is_err());
    }

    #[test]
    fn test_rejects_empty_text() {
        assert!(matches!(
            validate_input("", 10),
            Err(TranslationError::EmptyInput)
        ));
    }

    #[test]
    fn test_decode_input() {
        assert_eq!(decode_input(b"hello").unwrap(), "hello");
        assert!(matches!(
            decode_input(&[0xff, 0xfe, 0x00]),
            Err(TranslationError::InvalidType { .. })
        ));
    }
}
