//! Completion statistics.
//!
//! Pull-based: [`project_stats`] computes a fresh snapshot from the catalog
//! each time it is called. The host decides when to refresh — there are no
//! timers or cached counters here.
//!
//! The snapshot mirrors the original statistics pane: total completed cards,
//! then per subtype the remaining (unfilled) count broken down by rarity
//! tier, each tier carrying its product display label and respect value.

use crate::catalog::Catalog;
use crate::rarity;

/// Per-tier remaining count within one subtype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierStats {
    /// 1-based rarity tier.
    pub rarity: u8,
    pub label: &'static str,
    pub respect: u32,
    pub remaining: usize,
}

/// Per-subtype breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtypeStats {
    pub subtype: crate::catalog::Subtype,
    pub remaining: usize,
    pub tiers: Vec<TierStats>,
}

/// Snapshot of project completion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStats {
    pub completed: usize,
    pub subtypes: Vec<SubtypeStats>,
}

/// Compute a completion snapshot from the catalog.
///
/// Subtypes appear in the variant's display order; every tier of a subtype
/// is listed even when nothing remains in it, so the breakdown shape is
/// stable as cards get filled.
pub fn project_stats(catalog: &Catalog) -> ProjectStats {
    let completed = catalog.completed().count();
    let subtypes = catalog
        .project
        .variant
        .subtypes()
        .iter()
        .map(|&subtype| {
            let offset = u32::from(rarity::value_offset(subtype));
            let tiers: Vec<TierStats> = (1..=rarity::tier_count(subtype))
                .map(|tier| TierStats {
                    rarity: tier,
                    label: rarity::tier_label(subtype, tier),
                    respect: (u32::from(tier) + offset) * 1000,
                    remaining: catalog
                        .cards
                        .iter()
                        .filter(|c| !c.full && c.subtype == subtype && c.rarity == tier)
                        .count(),
                })
                .collect();
            SubtypeStats {
                subtype,
                remaining: tiers.iter().map(|t| t.remaining).sum(),
                tiers,
            }
        })
        .collect();
    ProjectStats {
        completed,
        subtypes,
    }
}
