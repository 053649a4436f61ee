//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane.
#[test]
fn default_constants_are_valid() {
    let cfg = PrecisionConfig::default();
    assert!(cfg.initial_bits >= MIN_WORKING_BITS);
    assert!(cfg.max_bits >= cfg.initial_bits);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        PrecisionConfig::new(4, 1024, 16).unwrap_err(),
        ConfigError::InvalidInitialBits(4)
    );
    assert_eq!(
        PrecisionConfig::new(128, 64, 16).unwrap_err(),
        ConfigError::InvalidBitRange {
            initial: 128,
            max: 64
        }
    );
}

#[test]
fn error_messages_name_the_field() {
    let err = PrecisionConfig::new(128, 64, 16).unwrap_err();
    assert!(err.to_string().contains("max_bits"));
}
