use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VIEWPORT: Viewport = Viewport { width: 1280.0, height: 800.0 };
const BUTTON: ButtonSize = ButtonSize { width: 110.0, height: 60.0 };

fn seeded(seed: u64) -> impl FnMut() -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    move || rng.random::<f64>()
}

// =============================================================
// No button
// =============================================================

#[test]
fn no_button_starts_docked() {
    let state = ProposalState::default();
    assert_eq!(state.no_button, NoButton::Docked);
    assert_eq!(state.no_button.position(), None);
    assert_eq!(state.fleeing_style(), "");
}

#[test]
fn dodge_moves_button_into_bounds() {
    let mut state = ProposalState::default();
    let mut sampler = seeded(1);
    for _ in 0..100 {
        state.dodge(VIEWPORT, BUTTON, &mut sampler);
        let pos = state.no_button.position().expect("button should be fleeing");
        assert!((20.0..=1150.0).contains(&pos.x));
        assert!((20.0..=720.0).contains(&pos.y));
    }
    assert_eq!(state.dodges, 100);
}

#[test]
fn resize_ignores_docked_button() {
    let mut state = ProposalState::default();
    assert!(!state.handle_resize(VIEWPORT, BUTTON, &mut || 0.5));
    assert_eq!(state.no_button, NoButton::Docked);
}

#[test]
fn resize_resamples_fleeing_button_into_new_viewport() {
    let mut state = ProposalState::default();
    state.dodge(VIEWPORT, BUTTON, &mut || 0.99);

    let small = Viewport { width: 400.0, height: 300.0 };
    assert!(state.handle_resize(small, BUTTON, &mut || 0.99));
    let pos = state.no_button.position().expect("still fleeing");
    assert!(pos.x <= 400.0 - 110.0 - 20.0);
    assert!(pos.y <= 300.0 - 60.0 - 20.0);
    assert_eq!(state.dodges, 1);
}

#[test]
fn fleeing_style_uses_pixel_position() {
    let mut state = ProposalState::default();
    state.no_button = NoButton::Fleeing(Position { x: 42.0, y: 99.5 });
    assert_eq!(state.fleeing_style(), "left: 42.0px; top: 99.5px;");
}

// =============================================================
// Accept
// =============================================================

#[test]
fn accept_navigates_to_itinerary_after_delay() {
    let mut state = ProposalState::default();
    assert_eq!(state.accept(), Some(Navigation { route: "/itinerary", delay_ms: 1500 }));
    assert!(state.accepted);
}

#[test]
fn accept_navigates_regardless_of_dodges() {
    for dodges in [0_u32, 1, 7, 250] {
        let mut state = ProposalState::default();
        let mut sampler = seeded(u64::from(dodges));
        for _ in 0..dodges {
            state.dodge(VIEWPORT, BUTTON, &mut sampler);
        }
        let nav = state.accept().expect("accept should schedule navigation");
        assert_eq!(nav.route, ITINERARY_ROUTE);
        assert_eq!(nav.delay_ms, NAVIGATE_DELAY_MS);
    }
}

#[test]
fn repeated_accept_schedules_once() {
    let mut state = ProposalState::default();
    assert!(state.accept().is_some());
    assert!(state.accept().is_none());
    assert!(state.accept().is_none());
}
