//! Insert, lookup and outcome transition behavior

use crate::common::*;

#[test]
fn insert_makes_record_visible_with_initial_state() {
    let t = TestRegistry::new();
    let expected = MatchId::derive("Cup Final", 2, 1_720_000_000);
    assert!(!t.registry.exists(&expected));

    let id = t
        .registry
        .insert(&owner(), "Cup Final", "Lions vs Tigers", 2, 1_720_000_000)
        .unwrap();

    assert_eq!(id, expected);
    assert!(t.registry.exists(&id));
    assert_eq!(
        t.registry.get(&id),
        Match {
            id,
            name: "Cup Final".to_string(),
            participants: "Lions vs Tigers".to_string(),
            participant_count: 2,
            date: 1_720_000_000,
            outcome: Outcome::Pending,
            winner: NO_WINNER,
        }
    );
}

#[test]
fn same_event_with_different_participants_is_duplicate() {
    let t = TestRegistry::new();
    let id = t
        .registry
        .insert(&owner(), "Cup Final", "Lions vs Tigers", 2, 42)
        .unwrap();

    let err = t
        .registry
        .insert(&owner(), "Cup Final", "Bears vs Wolves", 2, 42)
        .unwrap_err();

    assert_eq!(err, Error::DuplicateRecord(id));
    assert_eq!(t.registry.list_all(), vec![id]);
}

#[test]
fn different_count_or_date_is_a_new_event() {
    let t = TestRegistry::new();
    let a = t.registry.insert(&owner(), "Open", "A vs B", 2, 1).unwrap();
    let b = t.registry.insert(&owner(), "Open", "A vs B", 3, 1).unwrap();
    let c = t.registry.insert(&owner(), "Open", "A vs B", 2, 2).unwrap();

    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_eq!(t.registry.len(), 3);
}

#[test]
fn decided_with_valid_winner() {
    let t = TestRegistry::new();
    let id = t.add("Derby", 7);

    t.set(&id, Outcome::Decided, 1);

    let m = t.registry.get(&id);
    assert_eq!(m.outcome, Outcome::Decided);
    assert_eq!(m.winner, 1);
    assert_eq!(m.winner_name(), Some("Away"));
}

#[test]
fn winner_equal_to_participant_count_is_rejected() {
    let t = TestRegistry::new();
    let id = t.add("Derby", 7);

    let err = t
        .registry
        .set_outcome(&owner(), &id, Outcome::Decided, 2)
        .unwrap_err();

    assert_eq!(
        err,
        Error::InvalidWinner {
            id,
            winner: 2,
            participant_count: 2,
        }
    );
    assert_eq!(t.registry.get(&id).outcome, Outcome::Pending);
}

#[test]
fn negative_winner_is_rejected() {
    let t = TestRegistry::new();
    let id = t.add("Derby", 7);
    t.set(&id, Outcome::Underway, 0);

    let err = t
        .registry
        .set_outcome(&owner(), &id, Outcome::Decided, -1)
        .unwrap_err();

    assert!(err.is_invalid_winner());
    let m = t.registry.get(&id);
    assert_eq!(m.outcome, Outcome::Underway);
    assert_eq!(m.winner, NO_WINNER);
}

#[test]
fn zero_participant_match_can_never_be_decided() {
    let t = TestRegistry::new();
    let id = t.registry.insert(&owner(), "Bye", "", 0, 3).unwrap();

    assert!(t
        .registry
        .set_outcome(&owner(), &id, Outcome::Decided, 0)
        .unwrap_err()
        .is_invalid_winner());
    t.set(&id, Outcome::Draw, 0);
    assert_eq!(t.registry.get(&id).outcome, Outcome::Draw);
}

#[test]
fn unknown_id_transition_fails() {
    let t = TestRegistry::new();
    let err = t
        .registry
        .set_outcome(&owner(), &MatchId::ZERO, Outcome::Draw, 0)
        .unwrap_err();
    assert_eq!(err, Error::NotFound(MatchId::ZERO));
}

#[test]
fn stale_winner_survives_non_decided_transition() {
    let t = TestRegistry::new();
    let id = t.add("Derby", 7);

    t.set(&id, Outcome::Decided, 1);
    t.set(&id, Outcome::Draw, 0);

    let m = t.registry.get(&id);
    assert_eq!(m.outcome, Outcome::Draw);
    assert_eq!(m.winner, 1);
    assert_eq!(m.winner_name(), None);
}

#[test]
fn reads_of_absent_ids_degrade_to_sentinels() {
    let t = TestRegistry::new();
    let ghost = MatchId::derive("Ghost", 2, 0);

    assert!(!t.registry.exists(&ghost));
    assert!(!t.registry.exists(&MatchId::ZERO));
    assert!(t.registry.find(&ghost).is_none());

    let placeholder = t.registry.get(&ghost);
    assert_eq!(placeholder.id, ghost);
    assert!(placeholder.is_placeholder());
}
