use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::bookings::extract_booking_references;
use super::detection::{
    has_next_hearing_outcome, is_date_to_be_fixed, is_summons_approved,
    is_summons_required_for_respondents, DataValidationError,
};
use super::domain::{Hearing, HearingUnscheduledListingNeeds, SeedingHearing};
use super::listing::{transform_hearing, transform_with_seed_hearing};
use super::reconstitute::convert_to_hearing;
use super::traversal;

/// Knobs for how a resulted hearing is turned into follow-up work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Derive the seeding hearing from the resulted hearing when none is supplied.
    pub seed_from_first_sitting_day: bool,
}

/// Summons outcome for one court application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonsDecision {
    pub application_id: Uuid,
    pub approved: bool,
    pub respondents_summons_required: bool,
}

/// Everything downstream listing and notification need from one resulted hearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedHearing {
    pub hearing_id: Uuid,
    pub listing_needs: Vec<HearingUnscheduledListingNeeds>,
    pub follow_up_hearings: Vec<Hearing>,
    pub booking_references: BTreeSet<Uuid>,
    pub has_next_hearing_outcome: bool,
    pub date_to_be_fixed_outcomes: usize,
    pub summons: Vec<SummonsDecision>,
}

impl ProcessedHearing {
    /// Whether a follow-up hearing with this booking reference was already confirmed,
    /// so no further notification should be sent for it.
    pub fn is_already_booked(&self, booking_reference: &Uuid) -> bool {
        self.booking_references.contains(booking_reference)
    }
}

/// Composes the collector, detector, classifier and reconstitutor for one hearing.
#[derive(Debug, Clone, Default)]
pub struct ResultedHearingProcessor {
    config: ProcessingConfig,
}

impl ResultedHearingProcessor {
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    /// Seeding hearing to apply: the explicit one, else the derived one when configured.
    pub fn resolve_seed(
        &self,
        hearing: &Hearing,
        seed: Option<&SeedingHearing>,
    ) -> Option<SeedingHearing> {
        seed.cloned().or_else(|| {
            self.config
                .seed_from_first_sitting_day
                .then(|| SeedingHearing::from_hearing(hearing))
        })
    }

    pub fn process(
        &self,
        hearing: &Hearing,
        seed: Option<&SeedingHearing>,
    ) -> Result<ProcessedHearing, ProcessingError> {
        let summons = summons_decisions(hearing)?;

        let seed = self.resolve_seed(hearing, seed);
        let listing_needs = match &seed {
            Some(seed) => transform_with_seed_hearing(hearing, seed),
            None => transform_hearing(hearing),
        };
        let follow_up_hearings = listing_needs
            .iter()
            .map(|needs| convert_to_hearing(needs, seed.as_ref()))
            .collect();

        let booking_references = extract_booking_references(hearing);
        let date_to_be_fixed_outcomes = traversal::judicial_results(hearing)
            .filter(|result| is_date_to_be_fixed(result))
            .count();

        info!(
            hearing_id = %hearing.id,
            listing_needs = listing_needs.len(),
            booking_references = booking_references.len(),
            "processed resulted hearing"
        );

        Ok(ProcessedHearing {
            hearing_id: hearing.id,
            listing_needs,
            follow_up_hearings,
            booking_references,
            has_next_hearing_outcome: has_next_hearing_outcome(hearing),
            date_to_be_fixed_outcomes,
            summons,
        })
    }
}

fn summons_decisions(hearing: &Hearing) -> Result<Vec<SummonsDecision>, DataValidationError> {
    traversal::applications(hearing)
        .map(|application| {
            let respondents = application.respondents.as_deref().unwrap_or_default();
            let respondents_summons_required = is_summons_required_for_respondents(respondents)
                .inspect_err(|err| {
                    warn!(
                        application_id = %application.id,
                        error = %err,
                        "rejecting application respondents"
                    );
                })?;

            Ok(SummonsDecision {
                application_id: application.id,
                approved: is_summons_approved(application),
                respondents_summons_required,
            })
        })
        .collect()
}

/// Error raised while processing a resulted hearing.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Validation(#[from] DataValidationError),
}
