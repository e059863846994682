//! Property tests for the step transition function

use proptest::prelude::*;
use studyflow::{next_state, FlowAction, FlowState, Step};

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Consent),
        Just(Step::Read),
        Just(Step::Chat),
        Just(Step::Quiz),
        Just(Step::Done),
    ]
}

fn action() -> impl Strategy<Value = FlowAction> {
    prop_oneof![
        Just(FlowAction::Forward),
        Just(FlowAction::Back),
        Just(FlowAction::Restart),
        any::<bool>().prop_map(FlowAction::SetConsent),
    ]
}

fn state() -> impl Strategy<Value = FlowState> {
    (step(), any::<bool>()).prop_map(|(step, consented)| FlowState { step, consented })
}

proptest! {
    #[test]
    fn prop_never_leaves_consent_without_consent(actions in prop::collection::vec(action(), 0..40)) {
        let mut current = FlowState::new();
        for action in actions {
            let next = next_state(current, action);
            if current.step == Step::Consent && next.step != Step::Consent {
                prop_assert!(current.consented);
            }
            current = next;
        }
    }

    #[test]
    fn prop_moves_at_most_one_step(current in state(), action in action()) {
        let next = next_state(current, action);
        let distance = current.step.position().abs_diff(next.step.position());
        match action {
            FlowAction::Restart if current.step == Step::Done => {
                prop_assert_eq!(next.step, Step::Consent);
            }
            _ => {
                prop_assert!(distance <= 1);
            }
        }
    }

    #[test]
    fn prop_consent_flag_only_changes_on_consent_step(current in state(), action in action()) {
        let next = next_state(current, action);
        if next.consented != current.consented {
            prop_assert_eq!(current.step, Step::Consent);
            prop_assert!(matches!(action, FlowAction::SetConsent(_)));
        }
    }

    #[test]
    fn prop_restart_is_noop_outside_done(current in state()) {
        prop_assume!(current.step != Step::Done);
        prop_assert_eq!(next_state(current, FlowAction::Restart), current);
    }

    #[test]
    fn prop_back_undoes_forward_after_consent(current in state()) {
        prop_assume!(current.step != Step::Done && current.step != Step::Quiz);
        let forward = next_state(current, FlowAction::Forward);
        prop_assume!(forward != current);
        prop_assert_eq!(next_state(forward, FlowAction::Back), current);
    }
}
