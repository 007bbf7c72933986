//! Property tests against a simple reference model
//!
//! The model is a plain Vec of (id, outcome) in insertion order.

use crate::common::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert { name: u8, count: u8, date: u8 },
    SetOutcome { target: usize, outcome: u8, winner: i8 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..6, 0u8..4, 0u8..4).prop_map(|(name, count, date)| Op::Insert { name, count, date }),
        (any::<usize>(), 0u8..4, -2i8..5).prop_map(|(target, outcome, winner)| Op::SetOutcome {
            target,
            outcome,
            winner
        }),
    ]
}

proptest! {
    #[test]
    fn registry_matches_model(ops in proptest::collection::vec(op_strategy(), 0..60)) {
        let t = TestRegistry::new();
        let mut model: Vec<(MatchId, u8, Outcome)> = Vec::new();

        for op in ops {
            match op {
                Op::Insert { name, count, date } => {
                    let name = format!("Event{}", name);
                    let id = MatchId::derive(&name, count, date as u64);
                    let existed = t.registry.exists(&id);
                    let result = t.registry.insert(&owner(), &name, "A vs B", count, date as u64);

                    if existed {
                        prop_assert_eq!(result, Err(Error::DuplicateRecord(id)));
                    } else {
                        prop_assert_eq!(result, Ok(id));
                        prop_assert!(t.registry.exists(&id));
                        model.push((id, count, Outcome::Pending));
                    }
                }
                Op::SetOutcome { target, outcome, winner } => {
                    if model.is_empty() {
                        continue;
                    }
                    let slot = target % model.len();
                    let (id, count, _) = model[slot];
                    let outcome = Outcome::from_u8(outcome).unwrap();
                    let before = t.registry.get(&id);
                    let result = t.registry.set_outcome(&owner(), &id, outcome, winner);

                    let valid = outcome != Outcome::Decided
                        || (winner >= 0 && (winner as u8) < count);
                    if valid {
                        prop_assert!(result.is_ok());
                        model[slot].2 = outcome;
                        let after = t.registry.get(&id);
                        prop_assert_eq!(after.outcome, outcome);
                        if outcome == Outcome::Decided {
                            prop_assert_eq!(after.winner, winner);
                        } else {
                            prop_assert_eq!(after.winner, before.winner);
                        }
                    } else {
                        prop_assert!(result.unwrap_err().is_invalid_winner());
                        prop_assert_eq!(t.registry.get(&id), before);
                    }
                }
            }
        }

        let expected_all: Vec<MatchId> = model.iter().rev().map(|(id, _, _)| *id).collect();
        let expected_pending: Vec<MatchId> = model
            .iter()
            .rev()
            .filter(|(_, _, o)| *o == Outcome::Pending)
            .map(|(id, _, _)| *id)
            .collect();

        prop_assert_eq!(t.registry.list_all(), expected_all.clone());
        prop_assert_eq!(t.registry.list_pending(), expected_pending);
        prop_assert_eq!(t.registry.len(), model.len());

        let newest = t.registry.most_recent(false);
        prop_assert_eq!(newest.id, expected_all.first().copied().unwrap_or(MatchId::ZERO));
    }
}
