use super::*;

// =============================================================
// Helpers
// =============================================================

fn sample() -> FilterState {
    FilterState::new([Category::Web, Category::Mobile, Category::Web, Category::Design])
}

fn finish_all(state: &mut FilterState, selection: &Selection) {
    for ticket in &selection.exiting {
        state.finish_exit(*ticket);
    }
}

// =============================================================
// Category
// =============================================================

#[test]
fn category_default_is_all() {
    assert_eq!(Category::default(), Category::All);
}

#[test]
fn category_tags_round_trip() {
    for category in Category::EVERY {
        assert_eq!(Category::from_tag(category.tag()), Some(category));
    }
    assert_eq!(Category::from_tag("games"), None);
}

#[test]
fn all_matches_every_category() {
    for category in Category::EVERY {
        assert!(matches_filter(category, Category::All));
    }
}

#[test]
fn specific_tag_matches_only_itself() {
    assert!(matches_filter(Category::Web, Category::Web));
    assert!(!matches_filter(Category::Mobile, Category::Web));
    assert!(!matches_filter(Category::All, Category::Web));
}

// =============================================================
// select
// =============================================================

#[test]
fn new_state_shows_every_card() {
    let state = sample();
    assert_eq!(state.selected(), Category::All);
    assert_eq!(state.in_layout(), vec![0, 1, 2, 3]);
    assert_eq!(state.matching(), vec![0, 1, 2, 3]);
}

#[test]
fn selecting_tag_starts_exit_for_other_cards() {
    let mut state = sample();
    let selection = state.select(Category::Web);
    let exiting: Vec<usize> = selection.exiting.iter().map(|t| t.index).collect();
    assert_eq!(exiting, vec![1, 3]);
    assert!(selection.cancelled.is_empty());
    assert!(matches!(state.phase(1), Some(CardPhase::Exiting { .. })));
    assert_eq!(state.phase(0), Some(CardPhase::Shown));
    // Exiting cards still hold their place until the transition ends.
    assert_eq!(state.in_layout(), vec![0, 1, 2, 3]);
}

#[test]
fn finished_exits_leave_exactly_matching_cards() {
    let mut state = sample();
    let selection = state.select(Category::Web);
    finish_all(&mut state, &selection);
    assert_eq!(state.in_layout(), vec![0, 2]);
    assert_eq!(state.matching(), vec![0, 2]);
    assert_eq!(state.phase(1), Some(CardPhase::Hidden));
}

#[test]
fn selecting_all_restores_every_card() {
    let mut state = sample();
    let selection = state.select(Category::Design);
    finish_all(&mut state, &selection);
    assert_eq!(state.in_layout(), vec![3]);

    let selection = state.select(Category::All);
    assert!(selection.exiting.is_empty());
    assert_eq!(state.in_layout(), vec![0, 1, 2, 3]);
    for i in 0..state.len() {
        assert_eq!(state.phase(i), Some(CardPhase::Shown));
    }
}

#[test]
fn reselecting_during_exit_cancels_hide() {
    let mut state = sample();
    let first = state.select(Category::Web);
    let mobile_ticket = first.exiting[0];
    assert_eq!(mobile_ticket.index, 1);

    let second = state.select(Category::Mobile);
    assert_eq!(second.cancelled, vec![1]);
    assert_eq!(state.phase(1), Some(CardPhase::Shown));

    // The stale timer fires afterwards and must not hide the card.
    assert!(!state.finish_exit(mobile_ticket));
    assert_eq!(state.phase(1), Some(CardPhase::Shown));
}

#[test]
fn stale_ticket_does_not_hide_card_that_exited_again() {
    let mut state = sample();
    let first = state.select(Category::Web);
    let stale = first.exiting[0];
    state.select(Category::All);
    let again = state.select(Category::Design);
    let fresh = again.exiting.iter().find(|t| t.index == stale.index).copied();

    assert!(!state.finish_exit(stale));
    assert!(matches!(state.phase(stale.index), Some(CardPhase::Exiting { .. })));
    assert!(state.finish_exit(fresh.expect("card 1 exits again")));
    assert_eq!(state.phase(stale.index), Some(CardPhase::Hidden));
}

#[test]
fn repeated_select_keeps_pending_exit() {
    let mut state = sample();
    let first = state.select(Category::Web);
    let second = state.select(Category::Web);
    assert!(second.exiting.is_empty());
    assert!(second.cancelled.is_empty());
    assert!(state.finish_exit(first.exiting[0]));
}

#[test]
fn finish_exit_ignores_unknown_index() {
    let mut state = sample();
    assert!(!state.finish_exit(ExitTicket { index: 42, token: 1 }));
}

#[test]
fn empty_filter_is_legal() {
    let mut state = FilterState::new([]);
    assert!(state.is_empty());
    assert_eq!(state.select(Category::Web), Selection::default());
}

// =============================================================
// CardPhase
// =============================================================

#[test]
fn card_phase_classes() {
    assert_eq!(CardPhase::Shown.class(), "project-card");
    assert!(CardPhase::Exiting { token: 3 }.class().contains("filtering-out"));
    assert!(CardPhase::Hidden.class().contains("hidden"));
}
