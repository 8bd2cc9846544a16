//! Rarity and value-tier assignment.
//!
//! A card's position within its print run decides how rare it is: each
//! supported (subtype, run size) pair has a hand-authored ascending cutoff
//! table that partitions `[0, run_size)` into contiguous tiers. The tier is
//! the 1-based index of the range the ordinal falls in.
//!
//! The *value* tier is the rarity tier plus a fixed per-subtype offset
//! (elevated subtypes are worth more at the same rarity), and a card's
//! respect (point value) is the value tier × 1000:
//!
//! | Subtype  | Tiers | Offset | Respect range |
//! |----------|-------|--------|---------------|
//! | ordinary | 6     | +0     | 1000–6000     |
//! | special  | 7     | +2     | 3000–9000     |
//! | alpha    | 5     | +0     | 1000–5000     |
//! | omega    | 5     | +3     | 4000–8000     |
//! | delta    | 5     | +6     | 7000–11000    |
//!
//! The cutoff tables are fixed product data, not a formula — [`verify_tables`]
//! checks the cover invariant (strictly ascending, last cutoff == run size)
//! for every table and is run exhaustively by the test suite.

use crate::catalog::Subtype;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RarityError {
    #[error("No cutoff table for {subtype} runs of {run_size}")]
    UnknownRunSize { subtype: Subtype, run_size: u32 },
    #[error("Index {index} outside run of {run_size}")]
    IndexOutOfRun { index: u32, run_size: u32 },
    #[error("Cutoff table for {subtype} run {run_size} does not cover the run")]
    MalformedTable { subtype: Subtype, run_size: u32 },
}

/// Result of a tier allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    /// 1-based rarity tier within the subtype's table.
    pub rarity: u8,
    /// Value tier: rarity plus the subtype offset.
    pub value: u8,
}

impl Allocation {
    /// Point value stored on the card.
    pub fn respect(self) -> u32 {
        u32::from(self.value) * 1000
    }
}

// Cutoff tables. Each entry is (run_size, ascending cutoffs); the tier for an
// ordinal is the index of the first cutoff it falls below. Hand-authored
// product data — the last cutoff always equals the run size.
const ORDINARY_TABLES: &[(u32, &[u32])] = &[
    (100, &[33, 49, 64, 78, 90, 100]),
    (200, &[45, 83, 118, 150, 180, 200]),
    (300, &[80, 135, 185, 230, 270, 300]),
];

const SPECIAL_TABLES: &[(u32, &[u32])] = &[
    (50, &[13, 21, 28, 34, 39, 40, 50]),
    (100, &[35, 60, 73, 83, 88, 90, 100]),
];

// Shared by alpha/omega/delta — the VC variant differentiates subtypes only
// through the value offset.
const VC_TABLES: &[(u32, &[u32])] = &[
    (50, &[15, 28, 38, 45, 50]),
    (100, &[30, 56, 76, 90, 100]),
    (150, &[45, 84, 114, 135, 150]),
    (200, &[60, 112, 152, 180, 200]),
    (250, &[75, 140, 190, 225, 250]),
    (300, &[90, 168, 228, 270, 300]),
    (350, &[105, 196, 266, 315, 350]),
    (400, &[120, 224, 304, 360, 400]),
    (450, &[135, 252, 342, 405, 450]),
];

fn tables_for(subtype: Subtype) -> &'static [(u32, &'static [u32])] {
    match subtype {
        Subtype::Ordinary => ORDINARY_TABLES,
        Subtype::Special => SPECIAL_TABLES,
        Subtype::Alpha | Subtype::Omega | Subtype::Delta => VC_TABLES,
    }
}

fn cutoffs_for(subtype: Subtype, run_size: u32) -> Result<&'static [u32], RarityError> {
    tables_for(subtype)
        .iter()
        .find(|(size, _)| *size == run_size)
        .map(|(_, cutoffs)| *cutoffs)
        .ok_or(RarityError::UnknownRunSize { subtype, run_size })
}

/// Value-tier offset added to the rarity tier for elevated subtypes.
pub fn value_offset(subtype: Subtype) -> u8 {
    match subtype {
        Subtype::Ordinary | Subtype::Alpha => 0,
        Subtype::Special => 2,
        Subtype::Omega => 3,
        Subtype::Delta => 6,
    }
}

/// Number of rarity tiers in the subtype's tables.
pub fn tier_count(subtype: Subtype) -> u8 {
    match subtype {
        Subtype::Ordinary => 6,
        Subtype::Special => 7,
        Subtype::Alpha | Subtype::Omega | Subtype::Delta => 5,
    }
}

/// Run sizes with a cutoff table for this subtype, ascending.
pub fn supported_runs(subtype: Subtype) -> Vec<u32> {
    tables_for(subtype).iter().map(|(size, _)| *size).collect()
}

/// Respect values a card of this subtype can take, ascending.
pub fn respect_options(subtype: Subtype) -> Vec<u32> {
    let offset = value_offset(subtype);
    (1..=tier_count(subtype))
        .map(|tier| u32::from(tier + offset) * 1000)
        .collect()
}

/// Reverse mapping: which rarity tier does a respect value belong to?
///
/// Returns `None` when the respect is not one of the subtype's tier values.
pub fn rarity_for_respect(subtype: Subtype, respect: u32) -> Option<u8> {
    if respect == 0 || respect % 1000 != 0 {
        return None;
    }
    let value = respect / 1000;
    let offset = u32::from(value_offset(subtype));
    let rarity = value.checked_sub(offset)?;
    (1..=u32::from(tier_count(subtype)))
        .contains(&rarity)
        .then_some(rarity as u8)
}

/// Map an ordinal position within a print run to its rarity and value tiers.
///
/// `index` is 0-based. Fails when the (subtype, run size) pair has no cutoff
/// table or the index falls outside the run.
pub fn allocate(index: u32, run_size: u32, subtype: Subtype) -> Result<Allocation, RarityError> {
    let cutoffs = cutoffs_for(subtype, run_size)?;
    if index >= run_size {
        return Err(RarityError::IndexOutOfRun { index, run_size });
    }
    let tier = cutoffs
        .iter()
        .position(|&cutoff| index < cutoff)
        .ok_or(RarityError::IndexOutOfRun { index, run_size })?;
    let rarity = (tier + 1) as u8;
    Ok(Allocation {
        rarity,
        value: rarity + value_offset(subtype),
    })
}

/// Display label for a rarity tier, per variant convention.
///
/// These are the tier names the original product uses; note the NC ladders
/// skip "Epic" and the special ladder names both 7000 and 8000 "Mythical".
pub fn tier_label(subtype: Subtype, rarity: u8) -> &'static str {
    const VC: &[&str] = &["Ordinary", "Rare", "Epic", "Legendary", "Mythical"];
    const NC_ORDINARY: &[&str] = &[
        "Ordinary",
        "Unusual",
        "Rare",
        "Legendary",
        "Mythical",
        "Divine",
    ];
    const NC_SPECIAL: &[&str] = &[
        "Ordinary",
        "Unusual",
        "Rare",
        "Legendary",
        "Mythical",
        "Mythical",
        "Divine",
    ];
    let labels = match subtype {
        Subtype::Ordinary => NC_ORDINARY,
        Subtype::Special => NC_SPECIAL,
        Subtype::Alpha | Subtype::Omega | Subtype::Delta => VC,
    };
    labels
        .get(usize::from(rarity.saturating_sub(1)))
        .copied()
        .unwrap_or("Unknown")
}

/// Verify every cutoff table exactly covers its run: strictly ascending
/// cutoffs, the expected tier count, and a final cutoff equal to the run
/// size. Called by tests; table edits that break the cover invariant fail
/// the suite instead of silently mis-tiering cards.
pub fn verify_tables() -> Result<(), RarityError> {
    for subtype in [Subtype::Ordinary, Subtype::Special, Subtype::Alpha] {
        for (run_size, cutoffs) in tables_for(subtype) {
            let malformed = RarityError::MalformedTable {
                subtype,
                run_size: *run_size,
            };
            if cutoffs.len() != usize::from(tier_count(subtype)) {
                return Err(malformed);
            }
            if cutoffs.last() != Some(run_size) {
                return Err(malformed);
            }
            if cutoffs.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(malformed);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_every_run() {
        verify_tables().unwrap();
    }

    #[test]
    fn every_index_of_every_run_allocates() {
        // Exhaustive: union of tier ranges covers [0, run_size) with no gap.
        for subtype in [
            Subtype::Ordinary,
            Subtype::Special,
            Subtype::Alpha,
            Subtype::Omega,
            Subtype::Delta,
        ] {
            for run_size in supported_runs(subtype) {
                let mut last_rarity = 1;
                for index in 0..run_size {
                    let a = allocate(index, run_size, subtype).unwrap();
                    // tiers are contiguous and non-decreasing along the run
                    assert!(
                        a.rarity == last_rarity || a.rarity == last_rarity + 1,
                        "{subtype} run {run_size} index {index}: tier jumped {last_rarity} → {}",
                        a.rarity
                    );
                    last_rarity = a.rarity;
                }
                assert_eq!(last_rarity, tier_count(subtype), "{subtype} run {run_size}");
            }
        }
    }

    #[test]
    fn ordinary_100_matches_source_table() {
        let tier = |i| allocate(i, 100, Subtype::Ordinary).unwrap().rarity;
        assert_eq!(tier(0), 1);
        assert_eq!(tier(32), 1);
        assert_eq!(tier(33), 2);
        assert_eq!(tier(48), 2);
        assert_eq!(tier(49), 3);
        assert_eq!(tier(63), 3);
        assert_eq!(tier(64), 4);
        assert_eq!(tier(77), 4);
        assert_eq!(tier(78), 5);
        assert_eq!(tier(89), 5);
        assert_eq!(tier(90), 6);
        assert_eq!(tier(99), 6);
    }

    #[test]
    fn ordinary_value_equals_rarity() {
        for i in [0, 33, 64, 99] {
            let a = allocate(i, 100, Subtype::Ordinary).unwrap();
            assert_eq!(a.value, a.rarity);
        }
    }

    #[test]
    fn special_value_offset_is_two() {
        let a = allocate(0, 50, Subtype::Special).unwrap();
        assert_eq!(a.rarity, 1);
        assert_eq!(a.value, 3);
        assert_eq!(a.respect(), 3000);
        let last = allocate(49, 50, Subtype::Special).unwrap();
        assert_eq!(last.rarity, 7);
        assert_eq!(last.value, 9);
    }

    #[test]
    fn omega_value_offset_is_three() {
        for i in 0..100 {
            let a = allocate(i, 100, Subtype::Omega).unwrap();
            assert_eq!(a.value, a.rarity + 3);
        }
    }

    #[test]
    fn delta_value_offset_is_six() {
        let a = allocate(95, 100, Subtype::Delta).unwrap();
        assert_eq!(a.rarity, 5);
        assert_eq!(a.value, 11);
        assert_eq!(a.respect(), 11_000);
    }

    #[test]
    fn alpha_and_omega_share_rarity_cutoffs() {
        for i in [0, 29, 30, 55, 56, 75, 76, 89, 90, 99] {
            assert_eq!(
                allocate(i, 100, Subtype::Alpha).unwrap().rarity,
                allocate(i, 100, Subtype::Omega).unwrap().rarity,
            );
        }
    }

    #[test]
    fn unknown_run_size_is_an_error() {
        let err = allocate(0, 75, Subtype::Alpha).unwrap_err();
        assert!(matches!(err, RarityError::UnknownRunSize { run_size: 75, .. }));
        let err = allocate(0, 200, Subtype::Special).unwrap_err();
        assert!(matches!(err, RarityError::UnknownRunSize { .. }));
    }

    #[test]
    fn index_outside_run_is_an_error() {
        let err = allocate(100, 100, Subtype::Alpha).unwrap_err();
        assert!(matches!(err, RarityError::IndexOutOfRun { .. }));
    }

    #[test]
    fn respect_options_match_original_menus() {
        assert_eq!(respect_options(Subtype::Alpha), [1000, 2000, 3000, 4000, 5000]);
        assert_eq!(respect_options(Subtype::Omega), [4000, 5000, 6000, 7000, 8000]);
        assert_eq!(
            respect_options(Subtype::Delta),
            [7000, 8000, 9000, 10_000, 11_000]
        );
        assert_eq!(
            respect_options(Subtype::Ordinary),
            [1000, 2000, 3000, 4000, 5000, 6000]
        );
        assert_eq!(
            respect_options(Subtype::Special),
            [3000, 4000, 5000, 6000, 7000, 8000, 9000]
        );
    }

    #[test]
    fn rarity_for_respect_inverts_allocation() {
        for subtype in [
            Subtype::Ordinary,
            Subtype::Special,
            Subtype::Alpha,
            Subtype::Omega,
            Subtype::Delta,
        ] {
            for (tier, respect) in respect_options(subtype).iter().enumerate() {
                assert_eq!(
                    rarity_for_respect(subtype, *respect),
                    Some(tier as u8 + 1),
                    "{subtype} respect {respect}"
                );
            }
        }
    }

    #[test]
    fn rarity_for_respect_rejects_out_of_range() {
        assert_eq!(rarity_for_respect(Subtype::Alpha, 6000), None);
        assert_eq!(rarity_for_respect(Subtype::Omega, 3000), None);
        assert_eq!(rarity_for_respect(Subtype::Delta, 11_500), None);
        assert_eq!(rarity_for_respect(Subtype::Ordinary, 0), None);
    }

    #[test]
    fn tier_labels_follow_product_names() {
        assert_eq!(tier_label(Subtype::Alpha, 3), "Epic");
        assert_eq!(tier_label(Subtype::Ordinary, 3), "Rare");
        // the special ladder really does name two tiers "Mythical"
        assert_eq!(tier_label(Subtype::Special, 5), "Mythical");
        assert_eq!(tier_label(Subtype::Special, 6), "Mythical");
        assert_eq!(tier_label(Subtype::Special, 7), "Divine");
    }
}
