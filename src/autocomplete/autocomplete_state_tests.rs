//! Tests for AutocompleteController

use super::*;
use proptest::prelude::*;

fn controller() -> AutocompleteController {
    AutocompleteController::attach(InputId::new(1), false)
}

fn suggestions(phrases: &[&str]) -> Vec<Suggestion> {
    phrases.iter().map(|p| Suggestion::new(*p)).collect()
}

/// Controller with the given rows already applied for typed value "ca"
fn open_controller(phrases: &[&str]) -> AutocompleteController {
    let mut ac = controller();
    let request = ac.on_value_change("ca");
    let Some(FetchRequest::Suggestions { seq, .. }) = request else {
        panic!("expected a suggestion request");
    };
    assert!(ac.apply_suggestions(seq, "ca", suggestions(phrases)));
    ac
}

mod value_change_tests {
    use super::*;

    #[test]
    fn test_non_empty_value_issues_one_request() {
        let mut ac = controller();
        let request = ac.on_value_change("rust lang");
        assert_eq!(
            request,
            Some(FetchRequest::Suggestions {
                input: InputId::new(1),
                seq: 1,
                query: "rust lang".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_value_issues_nothing_and_closes() {
        let mut ac = open_controller(&["cat", "car"]);
        assert!(ac.is_open());

        assert_eq!(ac.on_value_change(""), None);
        assert!(!ac.is_open());
        assert!(ac.rows().is_empty());
    }

    #[test]
    fn test_value_change_clears_list_and_focus() {
        let mut ac = open_controller(&["cat", "car"]);
        ac.focus_next();
        assert_eq!(ac.focused(), Some(0));

        let request = ac.on_value_change("cat");
        assert!(request.is_some());
        assert!(!ac.is_open());
        assert_eq!(ac.focused(), None);
    }

    #[test]
    fn test_each_change_gets_a_new_sequence_number() {
        let mut ac = controller();
        let seqs: Vec<u64> = ["c", "ca", "cat"]
            .iter()
            .filter_map(|v| match ac.on_value_change(v) {
                Some(FetchRequest::Suggestions { seq, .. }) => Some(seq),
                _ => None,
            })
            .collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }
}

mod apply_tests {
    use super::*;

    #[test]
    fn test_rows_emphasize_typed_prefix() {
        let ac = open_controller(&["cat", "car"]);
        let rows = ac.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].emphasized, "ca");
        assert_eq!(rows[0].rest, "t");
        assert_eq!(rows[1].emphasized, "ca");
        assert_eq!(rows[1].rest, "r");
        assert_eq!(rows[1].phrase, "car");
    }

    #[test]
    fn test_all_returned_suggestions_render() {
        let phrases: Vec<String> = (0..25).map(|i| format!("ca{}", i)).collect();
        let refs: Vec<&str> = phrases.iter().map(String::as_str).collect();
        let ac = open_controller(&refs);
        assert_eq!(ac.rows().len(), 25);
    }

    #[test]
    fn test_empty_response_keeps_dropdown_closed() {
        let ac = open_controller(&[]);
        assert!(!ac.is_open());
    }

    #[test]
    fn test_last_response_to_arrive_wins() {
        let mut ac = controller();
        ac.on_value_change("c");
        ac.on_value_change("ca");

        // Newer response lands first, older one after it
        assert!(ac.apply_suggestions(2, "ca", suggestions(&["cat"])));
        assert!(ac.apply_suggestions(1, "c", suggestions(&["cow", "cup"])));

        let phrases: Vec<&str> = ac.rows().iter().map(|r| r.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["cow", "cup"]);
        assert_eq!(ac.rows()[0].emphasized, "c");
    }

    #[test]
    fn test_late_response_after_clearing_still_renders() {
        let mut ac = controller();
        ac.on_value_change("c");
        ac.on_value_change("");

        assert!(ac.apply_suggestions(1, "c", suggestions(&["cat"])));
        assert!(ac.is_open());
    }

    #[test]
    fn test_discard_stale_drops_superseded_responses() {
        let mut ac = AutocompleteController::attach(InputId::new(1), true);
        ac.on_value_change("c");
        ac.on_value_change("ca");

        assert!(ac.apply_suggestions(2, "ca", suggestions(&["cat"])));
        assert!(!ac.apply_suggestions(1, "c", suggestions(&["cow"])));
        assert_eq!(ac.rows()[0].phrase, "cat");
    }

    #[test]
    fn test_discard_stale_drops_response_after_clearing() {
        let mut ac = AutocompleteController::attach(InputId::new(1), true);
        ac.on_value_change("c");
        ac.on_value_change("");

        assert!(!ac.apply_suggestions(1, "c", suggestions(&["cat"])));
        assert!(!ac.is_open());
    }

    #[test]
    fn test_apply_resets_focus() {
        let mut ac = open_controller(&["cat", "car"]);
        ac.focus_next();
        assert!(ac.apply_suggestions(1, "ca", suggestions(&["cab"])));
        assert_eq!(ac.focused(), None);
    }
}

mod focus_tests {
    use super::*;

    #[test]
    fn test_down_from_none_focuses_first() {
        let mut ac = open_controller(&["cat", "car", "cab"]);
        ac.focus_next();
        assert_eq!(ac.focused(), Some(0));
    }

    #[test]
    fn test_down_wraps_to_first() {
        let mut ac = open_controller(&["cat", "car", "cab"]);
        for _ in 0..3 {
            ac.focus_next();
        }
        assert_eq!(ac.focused(), Some(2));
        ac.focus_next();
        assert_eq!(ac.focused(), Some(0));
    }

    #[test]
    fn test_up_from_none_focuses_last() {
        let mut ac = open_controller(&["cat", "car", "cab"]);
        ac.focus_prev();
        assert_eq!(ac.focused(), Some(2));
    }

    #[test]
    fn test_up_wraps_to_last() {
        let mut ac = open_controller(&["cat", "car", "cab"]);
        ac.focus_next();
        assert_eq!(ac.focused(), Some(0));
        ac.focus_prev();
        assert_eq!(ac.focused(), Some(2));
    }

    #[test]
    fn test_arrows_on_empty_list_do_nothing() {
        let mut ac = controller();
        ac.focus_next();
        ac.focus_prev();
        assert_eq!(ac.focused(), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_down_presses_cycle(len in 1usize..12, presses in 1usize..60) {
            let phrases: Vec<String> = (0..len).map(|i| format!("ca{}", i)).collect();
            let refs: Vec<&str> = phrases.iter().map(String::as_str).collect();
            let mut ac = open_controller(&refs);

            for _ in 0..presses {
                ac.focus_next();
            }
            prop_assert_eq!(ac.focused(), Some((presses - 1) % len));
        }

        #[test]
        fn prop_up_then_down_returns_to_start(len in 1usize..12, start in 0usize..12) {
            let phrases: Vec<String> = (0..len).map(|i| format!("ca{}", i)).collect();
            let refs: Vec<&str> = phrases.iter().map(String::as_str).collect();
            let mut ac = open_controller(&refs);

            for _ in 0..=(start % len) {
                ac.focus_next();
            }
            let before = ac.focused();
            ac.focus_prev();
            ac.focus_next();
            prop_assert_eq!(ac.focused(), before);
        }
    }
}

mod enter_tests {
    use super::*;

    #[test]
    fn test_enter_with_focus_activates_row() {
        let mut ac = open_controller(&["cat", "car"]);
        ac.focus_next();
        ac.focus_next();

        assert_eq!(ac.on_enter(), EnterAction::Activate("car".to_string()));
        assert!(!ac.is_open());
    }

    #[test]
    fn test_enter_without_focus_submits() {
        let mut ac = open_controller(&["cat", "car"]);
        assert_eq!(ac.on_enter(), EnterAction::Submit);
    }

    #[test]
    fn test_enter_on_closed_list_submits() {
        let mut ac = controller();
        assert_eq!(ac.on_enter(), EnterAction::Submit);
    }

    #[test]
    fn test_activate_out_of_range_is_none() {
        let mut ac = open_controller(&["cat"]);
        assert_eq!(ac.activate(5), None);
        assert!(ac.is_open());
    }

    #[test]
    fn test_activate_returns_phrase_and_closes() {
        let mut ac = open_controller(&["cat", "car"]);
        assert_eq!(ac.activate(0), Some("cat".to_string()));
        assert!(!ac.is_open());
        assert_eq!(ac.focused(), None);
    }
}
