//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// WORKING PRECISION TESTS
// =============================================================================

#[test]
fn test_initial_bits_are_accepted() {
    assert!(DEFAULT_INITIAL_BITS >= MIN_WORKING_BITS);
}

#[test]
fn test_max_bits_leave_room_for_doubling() {
    // The schedule doubles from the initial precision; make sure it can
    // double several times before hitting the ceiling.
    assert!(DEFAULT_MAX_BITS >= DEFAULT_INITIAL_BITS << 4);
}

#[test]
fn test_guard_bits_cover_unit_targets() {
    // A target of 2^0 must still get more than the initial precision.
    assert!(DEFAULT_GUARD_BITS > DEFAULT_INITIAL_BITS);
}

// =============================================================================
// SEARCH LIMIT TESTS
// =============================================================================

#[test]
fn test_modulus_ceiling_is_unit_domain() {
    assert_eq!(DEFAULT_MODULUS_CEILING, 0);
}

#[test]
fn test_search_depth_reaches_max_bits_scale() {
    assert!(DEFAULT_SEARCH_DEPTH >= 64);
}

#[test]
fn test_order_check_is_finer_than_unit() {
    assert!(DEFAULT_ORDER_CHECK_PRECISION < DEFAULT_MODULUS_CEILING);
}

#[test]
fn test_mesh_level_fits_in_u64_shift() {
    assert!(DEFAULT_MAX_MESH_LEVEL < 63);
}
