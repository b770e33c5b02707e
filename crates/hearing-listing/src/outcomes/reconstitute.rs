use super::domain::{
    CourtApplication, CourtApplicationCase, CourtOrder, Defendant, Hearing,
    HearingUnscheduledListingNeeds, Offence, ProsecutionCase, SeedingHearing,
};
use super::listing::prune::seeded;

/// Rebuild a plain hearing from a listing-need bundle for submission as a new hearing.
///
/// Judicial results are dropped at every level so the follow-up hearing only
/// carries case, party and offence identity.
pub fn convert_to_hearing(
    listing_needs: &HearingUnscheduledListingNeeds,
    seed: Option<&SeedingHearing>,
) -> Hearing {
    Hearing {
        id: listing_needs.id,
        jurisdiction_type: listing_needs.jurisdiction_type,
        hearing_days: Vec::new(),
        prosecution_cases: listing_needs.prosecution_cases.as_ref().map(|cases| {
            cases
                .iter()
                .map(|case| without_case_results(case, seed))
                .collect()
        }),
        court_applications: listing_needs
            .court_applications
            .as_ref()
            .map(|applications| applications.iter().map(without_application_results).collect()),
    }
}

fn without_case_results(case: &ProsecutionCase, seed: Option<&SeedingHearing>) -> ProsecutionCase {
    ProsecutionCase {
        id: case.id,
        prosecuting_authority_code: case.prosecuting_authority_code.clone(),
        defendants: case
            .defendants
            .iter()
            .map(|defendant| Defendant {
                id: defendant.id,
                offences: defendant
                    .offences
                    .iter()
                    .map(|offence| without_offence_results(offence, seed))
                    .collect(),
            })
            .collect(),
    }
}

fn without_offence_results(offence: &Offence, seed: Option<&SeedingHearing>) -> Offence {
    Offence {
        judicial_results: None,
        ..seeded(offence, seed)
    }
}

fn without_application_results(application: &CourtApplication) -> CourtApplication {
    CourtApplication {
        judicial_results: None,
        court_orders: application.court_orders.as_ref().map(|orders| {
            orders
                .iter()
                .map(|order| CourtOrder {
                    judicial_results: None,
                    ..order.clone()
                })
                .collect()
        }),
        court_application_cases: application.court_application_cases.as_ref().map(|links| {
            links
                .iter()
                .map(|link| CourtApplicationCase {
                    judicial_results: None,
                    ..link.clone()
                })
                .collect()
        }),
        ..application.clone()
    }
}
