//! Sample fixtures
//!
//! Inserts a fixed set of matches through the public registry API. Nothing
//! here bypasses authorization or the duplicate check.

use matchbook_core::calendar::to_timestamp;
use matchbook_core::{MatchId, Outcome, Principal, Result};
use tracing::debug;

use crate::registry::Registry;

struct Fixture {
    name: &'static str,
    participants: &'static str,
    when: (i32, u32, u32, u32, u32),
}

const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "Premier League",
        participants: "Arsenal vs Chelsea",
        when: (2024, 8, 17, 15, 0),
    },
    Fixture {
        name: "La Liga",
        participants: "Real Madrid vs Barcelona",
        when: (2024, 10, 26, 20, 0),
    },
    Fixture {
        name: "Champions League",
        participants: "Bayern Munich vs Inter Milan",
        when: (2025, 4, 8, 20, 0),
    },
    Fixture {
        name: "Serie A",
        participants: "Juventus vs AC Milan",
        when: (2025, 1, 18, 18, 0),
    },
    Fixture {
        name: "Bundesliga",
        participants: "Dortmund vs Leverkusen",
        when: (2025, 2, 14, 20, 30),
    },
];

/// Insert the sample fixtures as `caller`
///
/// Returns the ids in insertion order. After inserting, the second fixture is
/// marked Underway and the first Decided for its home side, so listings
/// show a mix of outcomes.
///
/// # Errors
///
/// Fails with `Unauthorized` if `caller` lacks write privilege, or with
/// `DuplicateRecord` if the fixtures are already present. An unauthorized
/// or repeated call fails on the first fixture and inserts nothing.
pub fn seed_sample_matches(registry: &Registry, caller: &Principal) -> Result<Vec<MatchId>> {
    let mut ids = Vec::with_capacity(FIXTURES.len());

    for fixture in FIXTURES {
        let (year, month, day, hour, minute) = fixture.when;
        let date = to_timestamp(year, month, day, hour, minute, 0)?;
        let id = registry.insert(caller, fixture.name, fixture.participants, 2, date)?;
        debug!(target: "matchbook::seed", id = %id, name = fixture.name, "Seeded fixture");
        ids.push(id);
    }

    registry.set_outcome(caller, &ids[1], Outcome::Underway, 0)?;
    registry.set_outcome(caller, &ids[0], Outcome::Decided, 0)?;

    Ok(ids)
}
