#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_year_is_plausible() {
    let year = current_year();
    assert!(year >= 2024, "{year}");
    assert!(year < 10_000, "{year}");
}
