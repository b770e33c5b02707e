//! Partitioning of unscheduled outcomes into listing-need bundles.
//!
//! Each offence and each top-level court application is assigned the listing
//! type of its first unscheduled (or NHCCS) result. Owners sharing a type are
//! merged into one bundle carrying a pruned copy of the hearing tree.

mod assignment;
mod bundles;
pub(crate) mod prune;

use tracing::debug;

use super::domain::{Hearing, HearingUnscheduledListingNeeds, SeedingHearing};

/// Listing needs for every unscheduled outcome, in discovery order.
pub fn transform_hearing(hearing: &Hearing) -> Vec<HearingUnscheduledListingNeeds> {
    classify(hearing, None)
}

/// As [`transform_hearing`], stamping every copied offence with the seeding hearing.
pub fn transform_with_seed_hearing(
    hearing: &Hearing,
    seed: &SeedingHearing,
) -> Vec<HearingUnscheduledListingNeeds> {
    classify(hearing, Some(seed))
}

fn classify(
    hearing: &Hearing,
    seed: Option<&SeedingHearing>,
) -> Vec<HearingUnscheduledListingNeeds> {
    bundles::discover(hearing)
        .iter()
        .map(|bundle| {
            debug!(
                hearing_id = %hearing.id,
                type_of_list = %bundle.type_id,
                offences = bundle.offences.len(),
                applications = bundle.applications.len(),
                "unscheduled listing need identified"
            );
            prune::build_listing_needs(hearing, bundle, seed)
        })
        .collect()
}
