use std::collections::BTreeSet;

use super::super::domain::{
    CourtApplication, Defendant, Hearing, HearingUnscheduledListingNeeds, JurisdictionType,
    Offence, ProsecutionCase, SeedingHearing, TypeOfList,
};
use super::super::reference::NEXT_HEARING_CROWN_DATE_TO_BE_FIXED;
use super::bundles::{ListingBundle, OffencePosition};

pub(crate) fn build_listing_needs(
    hearing: &Hearing,
    bundle: &ListingBundle,
    seed: Option<&SeedingHearing>,
) -> HearingUnscheduledListingNeeds {
    let jurisdiction_type = if bundle.type_id == NEXT_HEARING_CROWN_DATE_TO_BE_FIXED {
        JurisdictionType::Crown
    } else {
        hearing.jurisdiction_type
    };

    HearingUnscheduledListingNeeds {
        id: hearing.id,
        jurisdiction_type,
        type_of_list: TypeOfList {
            id: bundle.type_id,
            description: bundle.description.clone(),
        },
        prosecution_cases: pruned_cases(hearing, &bundle.offences, seed),
        court_applications: pruned_applications(hearing, &bundle.applications),
    }
}

fn pruned_cases(
    hearing: &Hearing,
    selected: &BTreeSet<OffencePosition>,
    seed: Option<&SeedingHearing>,
) -> Option<Vec<ProsecutionCase>> {
    if selected.is_empty() {
        return None;
    }

    let cases = hearing
        .prosecution_cases
        .iter()
        .flatten()
        .enumerate()
        .filter_map(|(case_index, case)| {
            let defendants: Vec<Defendant> = case
                .defendants
                .iter()
                .enumerate()
                .filter_map(|(defendant_index, defendant)| {
                    let offences: Vec<Offence> = defendant
                        .offences
                        .iter()
                        .enumerate()
                        .filter(|(offence_index, _)| {
                            selected.contains(&OffencePosition {
                                case: case_index,
                                defendant: defendant_index,
                                offence: *offence_index,
                            })
                        })
                        .map(|(_, offence)| seeded(offence, seed))
                        .collect();

                    (!offences.is_empty()).then(|| Defendant {
                        id: defendant.id,
                        offences,
                    })
                })
                .collect();

            (!defendants.is_empty()).then(|| ProsecutionCase {
                id: case.id,
                prosecuting_authority_code: case.prosecuting_authority_code.clone(),
                defendants,
            })
        })
        .collect();

    Some(cases)
}

fn pruned_applications(
    hearing: &Hearing,
    selected: &BTreeSet<usize>,
) -> Option<Vec<CourtApplication>> {
    if selected.is_empty() {
        return None;
    }

    Some(
        hearing
            .court_applications
            .iter()
            .flatten()
            .enumerate()
            .filter(|(index, _)| selected.contains(index))
            .map(|(_, application)| application.clone())
            .collect(),
    )
}

pub(crate) fn seeded(offence: &Offence, seed: Option<&SeedingHearing>) -> Offence {
    let mut offence = offence.clone();
    if let Some(seed) = seed {
        offence.seeding_hearing = Some(seed.clone());
    }
    offence
}
