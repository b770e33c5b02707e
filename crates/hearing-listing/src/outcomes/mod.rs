//! Classification of resulted hearings into follow-up listing work.

pub mod bookings;
pub mod detection;
pub mod domain;
pub mod listing;
pub mod reconstitute;
pub mod reference;
pub mod service;
pub mod traversal;

#[cfg(test)]
mod tests;

pub use bookings::extract_booking_references;
pub use detection::{
    has_next_hearing_outcome, is_date_to_be_fixed, is_summons_approved,
    is_summons_required_for_respondents, DataValidationError,
};
pub use domain::{
    CourtApplication, CourtApplicationCase, CourtApplicationParty, CourtCentre, CourtOrder,
    Defendant, Hearing, HearingDay, HearingType, HearingUnscheduledListingNeeds, JudicialResult,
    JudicialResultPrompt, JurisdictionType, NextHearing, Offence, Organisation, PersonDetails,
    ProsecutionCase, SeedingHearing, TypeOfList,
};
pub use listing::{transform_hearing, transform_with_seed_hearing};
pub use reconstitute::convert_to_hearing;
pub use service::{
    ProcessedHearing, ProcessingConfig, ProcessingError, ResultedHearingProcessor,
    SummonsDecision,
};
pub use traversal::ResultBearingNode;
