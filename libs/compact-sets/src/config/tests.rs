//! Tests covering solver configuration behavior.

use super::*;

#[test]
fn default_matches_constants() {
    let cfg = SolverConfig::default();
    assert_eq!(cfg.initial_bits, DEFAULT_INITIAL_BITS);
    assert_eq!(cfg.modulus_ceiling, DEFAULT_MODULUS_CEILING);
    assert_eq!(cfg.max_mesh_level, DEFAULT_MAX_MESH_LEVEL);
    assert_eq!(cfg.effort(), Effort::default());
}

#[test]
fn validate_rejects_inverted_bit_range() {
    let cfg = SolverConfig::default().with_precision(PrecisionConfig {
        initial_bits: 128,
        max_bits: 64,
        guard_bits: 16,
    });
    assert_eq!(
        cfg.validate().unwrap_err(),
        SolverConfigError::Precision(ConfigError::InvalidBitRange {
            initial: 128,
            max: 64
        })
    );
}

#[test]
fn validate_rejects_unrepresentable_mesh_level() {
    let cfg = SolverConfig::default().with_max_mesh_level(80);
    assert_eq!(cfg.validate().unwrap_err(), SolverConfigError::MeshLevel(80));
}

#[test]
fn missing_json_fields_take_defaults() {
    let cfg: SolverConfig = serde_json::from_str(r#"{ "modulus_ceiling": -3 }"#).unwrap();
    assert_eq!(cfg.modulus_ceiling, -3);
    assert_eq!(cfg.search_depth, DEFAULT_SEARCH_DEPTH);
    assert_eq!(cfg.max_bits, DEFAULT_MAX_BITS);
}

#[test]
fn json_round_trip_preserves_builders() {
    let cfg = SolverConfig::default()
        .with_search_depth(32)
        .with_trial_retries(3);
    let json = serde_json::to_string(&cfg).unwrap();
    let back: SolverConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}
