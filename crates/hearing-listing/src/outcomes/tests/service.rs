use chrono::NaiveDate;
use uuid::Uuid;

use super::common::*;
use crate::outcomes::domain::SeedingHearing;
use crate::outcomes::reference::SUMMONS_APPROVED;
use crate::outcomes::{
    DataValidationError, ProcessingConfig, ProcessingError, ResultedHearingProcessor,
};

#[test]
fn processor_collects_needs_bookings_and_summons() {
    let booked = Uuid::new_v4();
    let mut summons = application(vec![scheduled(SUMMONS_APPROVED, "Summons approved")]);
    summons.respondents = Some(vec![respondent(true), respondent(true)]);

    let mut dated = asd();
    dated.judicial_result_prompts = vec![prompt("Next hearing", "Date and time to be fixed")];

    let hearing = hearing(
        vec![prosecution_case(vec![defendant(vec![
            offence(vec![with_next_hearing(wofn(), Some(booked))]),
            offence(vec![dated]),
        ])])],
        vec![summons.clone()],
    );

    let processed = ResultedHearingProcessor::default()
        .process(&hearing, None)
        .expect("hearing processes");

    assert_eq!(processed.hearing_id, hearing.id);
    assert_eq!(processed.listing_needs.len(), 2);
    assert_eq!(processed.follow_up_hearings.len(), 2);
    assert!(processed
        .follow_up_hearings
        .iter()
        .flat_map(|follow_up| follow_up.prosecution_cases.iter().flatten())
        .flat_map(|case| case.defendants.iter())
        .flat_map(|defendant| defendant.offences.iter())
        .all(|offence| offence.judicial_results.is_none() && offence.seeding_hearing.is_none()));
    assert!(processed.has_next_hearing_outcome);
    assert!(processed.is_already_booked(&booked));
    assert!(!processed.is_already_booked(&Uuid::new_v4()));
    assert_eq!(processed.date_to_be_fixed_outcomes, 1);
    assert_eq!(processed.summons.len(), 1);
    assert_eq!(processed.summons[0].application_id, summons.id);
    assert!(processed.summons[0].approved);
    assert!(processed.summons[0].respondents_summons_required);
}

#[test]
fn processor_derives_seed_from_first_sitting_day_when_configured() {
    let hearing = single_defendant_hearing(vec![offence(vec![wofn()])]);
    let processor = ResultedHearingProcessor::new(ProcessingConfig {
        seed_from_first_sitting_day: true,
    });

    let processed = processor.process(&hearing, None).expect("hearing processes");

    let seed = processed.listing_needs[0]
        .offences()
        .next()
        .and_then(|offence| offence.seeding_hearing.clone())
        .expect("offence seeded");
    assert_eq!(seed.seeding_hearing_id, hearing.id);
    assert_eq!(seed.sitting_day, NaiveDate::from_ymd_opt(2024, 3, 11));
}

#[test]
fn explicit_seed_wins_over_derived_seed() {
    let hearing = single_defendant_hearing(vec![offence(vec![asd()])]);
    let processor = ResultedHearingProcessor::new(ProcessingConfig {
        seed_from_first_sitting_day: true,
    });
    let explicit = SeedingHearing::new(Uuid::new_v4());

    let resolved = processor.resolve_seed(&hearing, Some(&explicit));

    assert_eq!(resolved, Some(explicit));
    assert_eq!(
        ResultedHearingProcessor::default().resolve_seed(&hearing, None),
        None
    );
}

#[test]
fn processor_propagates_inconsistent_respondents() {
    let mut disputed = application(vec![asd()]);
    disputed.respondents = Some(vec![respondent(true), respondent(false)]);
    let hearing = hearing(Vec::new(), vec![disputed]);

    match ResultedHearingProcessor::default().process(&hearing, None) {
        Err(ProcessingError::Validation(DataValidationError::InconsistentSummonsRequired {
            required: 1,
            not_required: 1,
        })) => {}
        other => panic!("expected validation failure, got {other:?}"),
    }
}
