/// Property-based tests for match outcome records using proptest
///
/// These tests verify the ordering and lookup invariants of the outcome
/// record across arbitrary sequences of reported results.
use match_outcome::{MatchOutcome, PLACEMENT_UNSET, ParticipantResult};
use proptest::prelude::*;
use std::collections::HashMap;

// Strategy to generate one of the five result classifications
fn result_strategy() -> impl Strategy<Value = ParticipantResult> {
    prop_oneof![
        Just(ParticipantResult::Unset),
        Just(ParticipantResult::None),
        Just(ParticipantResult::Win),
        Just(ParticipantResult::Loss),
        Just(ParticipantResult::Tie),
    ]
}

// Strategy to generate one reported result: an id drawn from a small pool
// (so sequences update the same participant), the raw fields, and which of
// the three setter forms to report it through
fn report_strategy() -> impl Strategy<Value = (String, ParticipantResult, i32, u8)> {
    ("p_[0-9]", result_strategy(), any::<i32>(), 0u8..3)
}

proptest! {
    #[test]
    fn test_set_then_get_returns_exactly_what_was_set(
        participant_id in "[a-zA-Z0-9_-]{0,16}",
        result in result_strategy(),
        placement in any::<i32>(),
    ) {
        let mut outcome = MatchOutcome::new();
        outcome.set_participant_result(&participant_id, result, placement);

        prop_assert_eq!(outcome.result_for(&participant_id), result);
        prop_assert_eq!(outcome.placement_for(&participant_id), placement);
        prop_assert_eq!(outcome.participant_ids(), [participant_id]);
    }

    #[test]
    fn test_arbitrary_report_sequences_match_reference_model(
        reports in prop::collection::vec(report_strategy(), 0..32)
    ) {
        let mut outcome = MatchOutcome::new();
        let mut order: Vec<String> = Vec::new();
        let mut stored: HashMap<String, (ParticipantResult, i32)> = HashMap::new();

        for (participant_id, result, placement, form) in reports {
            let expected = match form {
                0 => {
                    outcome.set_participant_result(&participant_id, result, placement);
                    (result, placement)
                }
                1 => {
                    outcome.set_result(&participant_id, result);
                    (result, PLACEMENT_UNSET)
                }
                _ => {
                    outcome.set_placement(&participant_id, placement);
                    (ParticipantResult::Unset, placement)
                }
            };
            if !order.contains(&participant_id) {
                order.push(participant_id.clone());
            }
            stored.insert(participant_id, expected);
        }

        // First-insertion order, each id exactly once
        prop_assert_eq!(outcome.participant_ids(), order.as_slice());
        prop_assert_eq!(outcome.len(), stored.len());

        // Every lookup reflects the last report for that id
        for (participant_id, (result, placement)) in &stored {
            prop_assert_eq!(outcome.result_for(participant_id), *result);
            prop_assert_eq!(outcome.placement_for(participant_id), *placement);
        }
    }

    #[test]
    fn test_unreported_ids_resolve_to_sentinels(
        reports in prop::collection::vec(report_strategy(), 0..16),
        probe in "x_[a-z]{1,8}",
    ) {
        let mut outcome = MatchOutcome::new();
        for (participant_id, result, placement, _) in reports {
            outcome.set_participant_result(&participant_id, result, placement);
        }

        // The probe prefix is disjoint from the generated id pool
        prop_assert_eq!(outcome.result_for(&probe), ParticipantResult::Unset);
        prop_assert_eq!(outcome.placement_for(&probe), PLACEMENT_UNSET);
    }

    #[test]
    fn test_result_code_roundtrip(result in result_strategy()) {
        prop_assert_eq!(ParticipantResult::from_code(result.code()), Ok(result));
    }

    #[test]
    fn test_unknown_result_codes_are_rejected(code in any::<i32>()) {
        prop_assume!(!(-1..=3).contains(&code));
        prop_assert!(ParticipantResult::from_code(code).is_err());
    }

    #[test]
    fn test_display_mentions_each_participant_once(
        reports in prop::collection::vec(report_strategy(), 0..16)
    ) {
        let mut outcome = MatchOutcome::new();
        for (participant_id, result, placement, _) in reports {
            outcome.set_participant_result(&participant_id, result, placement);
        }

        let repr = outcome.to_string();
        prop_assert!(repr.starts_with("[MatchOutcome"), "repr was: {repr}");
        prop_assert_eq!(repr.matches("->").count(), outcome.len());
    }
}
