use super::*;

#[test]
fn docked_no_button_is_interactive_until_it_flees() {
    assert_eq!(docked_no_class(false), "proposal__no");
}

#[test]
fn fled_no_button_leaves_a_placeholder() {
    let class = docked_no_class(true);
    assert!(class.contains("proposal__no--placeholder"));
    assert!(class.starts_with("proposal__no"));
}
