//! Fixed parameter sets for the Poseidon permutation.
//!
//! Both hash variants share one permutation skeleton; they differ in round
//! count, S-box exponent, where round-key addition sits relative to the
//! S-box and the MDS multiply, and of course in their key/MDS tables. That
//! difference is captured by a schedule descriptor rather than duplicated
//! permutation code, so the two variants cannot drift apart structurally.

mod kimchi;
mod legacy;

use curve::Fp;

/// Permutation state width in field elements.
pub const SPONGE_WIDTH: usize = 3;

/// Number of state lanes that absorb input per permutation call.
pub const SPONGE_RATE: usize = 2;

/// Where round-key addition sits within a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RoundSchedule {
    /// Keys first: {add keys, S-box, MDS} per round, plus one trailing key
    /// row after the last round (the legacy schedule; `full_rounds + 1` key
    /// rows).
    KeyedBefore,
    /// Keys last: {S-box, MDS, add keys} per round (the kimchi schedule;
    /// `full_rounds` key rows).
    KeyedAfter,
}

/// One complete parameter set: round structure plus constant tables.
pub(crate) struct SpongeParams {
    pub full_rounds: usize,
    pub sbox_alpha: u64,
    pub schedule: RoundSchedule,
    pub round_keys: &'static [[Fp; SPONGE_WIDTH]],
    pub mds: &'static [[Fp; SPONGE_WIDTH]; SPONGE_WIDTH],
}

pub(crate) static LEGACY: SpongeParams = SpongeParams {
    full_rounds: 64,
    sbox_alpha: 5,
    schedule: RoundSchedule::KeyedBefore,
    round_keys: &legacy::LEGACY_ROUND_KEYS,
    mds: &legacy::LEGACY_MDS,
};

pub(crate) static KIMCHI: SpongeParams = SpongeParams {
    full_rounds: 55,
    sbox_alpha: 7,
    schedule: RoundSchedule::KeyedAfter,
    round_keys: &kimchi::KIMCHI_ROUND_KEYS,
    mds: &kimchi::KIMCHI_MDS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shapes_match_schedules() {
        assert_eq!(LEGACY.round_keys.len(), LEGACY.full_rounds + 1);
        assert_eq!(KIMCHI.round_keys.len(), KIMCHI.full_rounds);
    }

    #[test]
    fn tables_are_distinct() {
        assert_ne!(LEGACY.round_keys[0], KIMCHI.round_keys[0]);
        assert_ne!(LEGACY.mds, KIMCHI.mds);
    }

    #[test]
    fn mds_entries_are_nonzero() {
        for matrix in [LEGACY.mds, KIMCHI.mds] {
            for row in matrix {
                for entry in row {
                    assert!(!entry.is_zero());
                }
            }
        }
    }
}
