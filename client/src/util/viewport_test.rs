#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_viewport_is_none_without_a_browser() {
    assert_eq!(current_viewport(), None);
}
