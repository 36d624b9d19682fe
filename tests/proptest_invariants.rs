//! Property-based tests for selection cycling and color expansion.

#![allow(clippy::cast_possible_truncation)]

use groupswitch::switcher::{Direction, SwitcherState};
use groupswitch::{Group, GroupColor, color_code, hex_channels, hex_to_rgba};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn groups_strategy(min: usize) -> impl Strategy<Value = Vec<Group>> {
    prop::collection::vec(
        (any::<i64>(), "[a-z]{1,12}").prop_map(|(id, title)| {
            Group::new(id, title, GroupColor::Grey)
        }),
        min..16,
    )
}

fn hex_digit() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
    ])
}

fn hex_3_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(hex_digit(), 3).prop_map(|chars| chars.into_iter().collect())
}

fn hex_6_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(hex_digit(), 6).prop_map(|chars| chars.into_iter().collect())
}

// ============================================================================
// Cycling Properties
// ============================================================================

proptest! {
    /// Advancing forward N times over N groups is the identity.
    #[test]
    fn prop_forward_cycle_is_identity(groups in groups_strategy(2)) {
        let len = groups.len();
        let mut state = SwitcherState::new();
        state.open_with(groups, false);
        let start = state.selected_index();
        for _ in 0..len {
            state.advance(Direction::Forward);
        }
        prop_assert_eq!(state.selected_index(), start);
    }

    /// Advancing backward N times over N groups is the identity.
    #[test]
    fn prop_backward_cycle_is_identity(groups in groups_strategy(2)) {
        let len = groups.len();
        let mut state = SwitcherState::new();
        state.open_with(groups, false);
        let start = state.selected_index();
        for _ in 0..len {
            state.advance(Direction::Backward);
        }
        prop_assert_eq!(state.selected_index(), start);
    }

    /// One forward step then one backward step cancels out, and vice versa.
    #[test]
    fn prop_forward_backward_cancel(groups in groups_strategy(1), steps in 0usize..32) {
        let mut state = SwitcherState::new();
        state.open_with(groups, false);
        let start = state.selected_index();
        for _ in 0..steps {
            state.advance(Direction::Forward);
            state.advance(Direction::Backward);
        }
        prop_assert_eq!(state.selected_index(), start);
    }

    /// The selected index stays valid through any step sequence.
    #[test]
    fn prop_selected_always_in_bounds(
        groups in groups_strategy(1),
        steps in prop::collection::vec(any::<bool>(), 0..64),
        reverse in any::<bool>(),
    ) {
        let len = groups.len();
        let mut state = SwitcherState::new();
        state.open_with(groups, reverse);
        prop_assert!(state.selected_index() < len);
        for forward in steps {
            state.advance(Direction::from_reverse(!forward));
            prop_assert!(state.selected_index() < len);
        }
    }

    /// Entry policy: 1 forward, last in reverse, 0 for a single group.
    #[test]
    fn prop_entry_index_policy(groups in groups_strategy(1), reverse in any::<bool>()) {
        let len = groups.len();
        let mut state = SwitcherState::new();
        state.open_with(groups, reverse);
        let expected = if len == 1 {
            0
        } else if reverse {
            len - 1
        } else {
            1
        };
        prop_assert_eq!(state.selected_index(), expected);
    }
}

// ============================================================================
// Color Properties
// ============================================================================

proptest! {
    /// Every 3-digit hex expands to the same channels as its doubled form.
    #[test]
    fn prop_hex_3_matches_doubled_6(hex in hex_3_strategy()) {
        let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
        prop_assert_eq!(hex_channels(&hex), hex_channels(&doubled));
    }

    /// 6-digit parsing accepts every digit combination, with or without '#'.
    #[test]
    fn prop_hex_6_always_parses(hex in hex_6_strategy()) {
        prop_assert!(hex_channels(&hex).is_some());
        prop_assert_eq!(hex_channels(&format!("#{hex}")), hex_channels(&hex));
    }

    /// The rgba expansion always carries the exact channel triple.
    #[test]
    fn prop_rgba_carries_channels(hex in hex_6_strategy(), alpha in 0.0f32..=1.0) {
        let (r, g, b) = hex_channels(&hex).unwrap();
        let rgba = hex_to_rgba(&hex, alpha);
        prop_assert_eq!(rgba, format!("rgba({r},{g},{b},{alpha})"));
    }

    /// Arbitrary input, multibyte included, parses or is rejected; it
    /// never panics, and the rgba expansion always yields the fallback
    /// channels for rejected input.
    #[test]
    fn prop_hex_parsing_is_total(input in "\\PC*", alpha in 0.0f32..=1.0) {
        let channels = hex_channels(&input);
        let rgba = hex_to_rgba(&input, alpha);
        let (r, g, b) = channels.unwrap_or((0x99, 0x99, 0x99));
        prop_assert_eq!(rgba, format!("rgba({r},{g},{b},{alpha})"));
    }
}

// ============================================================================
// Palette Totality
// ============================================================================

/// Every palette color has a parseable 6-digit hex; the fallback parses too.
#[test]
fn test_palette_hexes_parse() {
    for color in GroupColor::PALETTE {
        let hex = color_code(color);
        assert!(hex_channels(hex).is_some(), "unparseable hex for {color:?}");
    }
    assert!(hex_channels(groupswitch::FALLBACK_HEX).is_some());
}
