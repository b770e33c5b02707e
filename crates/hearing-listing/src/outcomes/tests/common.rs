use chrono::{TimeZone, Utc};
use uuid::{uuid, Uuid};

use crate::outcomes::domain::{
    CourtApplication, CourtApplicationCase, CourtApplicationParty, CourtOrder, Defendant, Hearing,
    HearingDay, JudicialResult, JudicialResultPrompt, JurisdictionType, NextHearing, Offence,
    PersonDetails, ProsecutionCase,
};
use crate::outcomes::reference::{NEXT_HEARING_CROWN_DATE_TO_BE_FIXED, STAND_ALONE_CASE};

pub(super) const WOFN: Uuid = uuid!("4ba29b2b-7ca4-4f17-9a6c-1b1e9d1f2a10");
pub(super) const ASD: Uuid = uuid!("c2d9f0a4-1f7e-4e0b-8d7b-2e3c8a9b6d21");
pub(super) const FINE: Uuid = uuid!("969f150c-cd05-46b0-9dd9-30891efcc766");

pub(super) fn unscheduled(type_id: Uuid, label: &str) -> JudicialResult {
    JudicialResult {
        judicial_result_type_id: type_id,
        label: label.to_string(),
        is_unscheduled: true,
        next_hearing: None,
        judicial_result_prompts: Vec::new(),
    }
}

pub(super) fn scheduled(type_id: Uuid, label: &str) -> JudicialResult {
    JudicialResult {
        is_unscheduled: false,
        ..unscheduled(type_id, label)
    }
}

pub(super) fn wofn() -> JudicialResult {
    unscheduled(WOFN, "Warrant of further detention")
}

pub(super) fn asd() -> JudicialResult {
    unscheduled(ASD, "Adjourned sine die")
}

pub(super) fn fine() -> JudicialResult {
    scheduled(FINE, "Fine")
}

pub(super) fn nhccs() -> JudicialResult {
    scheduled(NEXT_HEARING_CROWN_DATE_TO_BE_FIXED, "Date and time to be fixed")
}

pub(super) fn sac() -> JudicialResult {
    scheduled(STAND_ALONE_CASE, "Stand alone case")
}

pub(super) fn with_next_hearing(
    result: JudicialResult,
    booking_reference: Option<Uuid>,
) -> JudicialResult {
    JudicialResult {
        next_hearing: Some(NextHearing {
            booking_reference,
            date_to_be_fixed: None,
            hearing_type: None,
            court_centre: None,
            listed_start_date_time: None,
        }),
        ..result
    }
}

pub(super) fn prompt(label: &str, value: &str) -> JudicialResultPrompt {
    JudicialResultPrompt {
        label: label.to_string(),
        value: value.to_string(),
        duration_element: None,
    }
}

pub(super) fn offence(results: Vec<JudicialResult>) -> Offence {
    Offence {
        id: Uuid::new_v4(),
        offence_code: Some("TH68001".to_string()),
        judicial_results: Some(results),
        seeding_hearing: None,
    }
}

pub(super) fn defendant(offences: Vec<Offence>) -> Defendant {
    Defendant {
        id: Uuid::new_v4(),
        offences,
    }
}

pub(super) fn prosecution_case(defendants: Vec<Defendant>) -> ProsecutionCase {
    ProsecutionCase {
        id: Uuid::new_v4(),
        prosecuting_authority_code: Some("TFL".to_string()),
        defendants,
    }
}

pub(super) fn respondent(summons_required: bool) -> CourtApplicationParty {
    CourtApplicationParty {
        id: Uuid::new_v4(),
        summons_required,
        person_details: Some(PersonDetails {
            first_name: "Sam".to_string(),
            last_name: "Rivers".to_string(),
        }),
        organisation: None,
    }
}

pub(super) fn application(results: Vec<JudicialResult>) -> CourtApplication {
    CourtApplication {
        id: Uuid::new_v4(),
        application_reference: Some("APP-0001".to_string()),
        applicant: None,
        subject: None,
        respondents: None,
        court_orders: None,
        court_application_cases: None,
        judicial_results: Some(results),
    }
}

pub(super) fn court_order(results: Vec<JudicialResult>) -> CourtOrder {
    CourtOrder {
        id: Uuid::new_v4(),
        order_date: None,
        judicial_results: Some(results),
    }
}

pub(super) fn case_link(results: Vec<JudicialResult>) -> CourtApplicationCase {
    CourtApplicationCase {
        prosecution_case_id: Uuid::new_v4(),
        case_status: Some("ACTIVE".to_string()),
        judicial_results: Some(results),
    }
}

pub(super) fn hearing(
    cases: Vec<ProsecutionCase>,
    applications: Vec<CourtApplication>,
) -> Hearing {
    Hearing {
        id: Uuid::new_v4(),
        jurisdiction_type: JurisdictionType::Magistrates,
        hearing_days: vec![
            HearingDay {
                sitting_day: Utc.with_ymd_and_hms(2024, 3, 11, 10, 0, 0).unwrap(),
                listed_duration_minutes: Some(120),
            },
            HearingDay {
                sitting_day: Utc.with_ymd_and_hms(2024, 3, 12, 10, 0, 0).unwrap(),
                listed_duration_minutes: Some(120),
            },
        ],
        prosecution_cases: (!cases.is_empty()).then_some(cases),
        court_applications: (!applications.is_empty()).then_some(applications),
    }
}

/// Hearing with one case, one defendant and the given offences.
pub(super) fn single_defendant_hearing(offences: Vec<Offence>) -> Hearing {
    hearing(vec![prosecution_case(vec![defendant(offences)])], Vec::new())
}

pub(super) fn offence_ids(needs: &crate::outcomes::HearingUnscheduledListingNeeds) -> Vec<Uuid> {
    needs.offences().map(|offence| offence.id).collect()
}
