//! Float assertion helpers
#![allow(dead_code)] // Test utilities may not all be used in every test

pub const EPSILON: f64 = 1e-9;

#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
