use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Court tier a hearing (or a follow-up listing) sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JurisdictionType {
    Crown,
    Magistrates,
}

impl JurisdictionType {
    pub const fn label(self) -> &'static str {
        match self {
            JurisdictionType::Crown => "CROWN",
            JurisdictionType::Magistrates => "MAGISTRATES",
        }
    }
}

/// Resulted hearing as received from the hearing context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hearing {
    pub id: Uuid,
    pub jurisdiction_type: JurisdictionType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hearing_days: Vec<HearingDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecution_cases: Option<Vec<ProsecutionCase>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_applications: Option<Vec<CourtApplication>>,
}

/// One sitting of a (possibly multi-day) hearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingDay {
    pub sitting_day: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProsecutionCase {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecuting_authority_code: Option<String>,
    #[serde(default)]
    pub defendants: Vec<Defendant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defendant {
    pub id: Uuid,
    #[serde(default)]
    pub offences: Vec<Offence>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offence {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offence_code: Option<String>,
    /// Ordered; the first qualifying result decides the listing type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judicial_results: Option<Vec<JudicialResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seeding_hearing: Option<SeedingHearing>,
}

/// Outcome recorded against an offence, application, order or case link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudicialResult {
    pub judicial_result_type_id: Uuid,
    pub label: String,
    #[serde(default)]
    pub is_unscheduled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hearing: Option<NextHearing>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub judicial_result_prompts: Vec<JudicialResultPrompt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudicialResultPrompt {
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_element: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextHearing {
    /// Present once the follow-up hearing has been confirmed by listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_reference: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to_be_fixed: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub hearing_type: Option<HearingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_centre: Option<CourtCentre>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_start_date_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingType {
    pub id: Uuid,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtCentre {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtApplication {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant: Option<CourtApplicationParty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<CourtApplicationParty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondents: Option<Vec<CourtApplicationParty>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_orders: Option<Vec<CourtOrder>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_application_cases: Option<Vec<CourtApplicationCase>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judicial_results: Option<Vec<JudicialResult>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtApplicationParty {
    pub id: Uuid,
    #[serde(default)]
    pub summons_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_details: Option<PersonDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation: Option<Organisation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    pub name: String,
}

/// Order the application was brought against (e.g. a breach of a community order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtOrder {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judicial_results: Option<Vec<JudicialResult>>,
}

/// Link between an application and an existing prosecution case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtApplicationCase {
    pub prosecution_case_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judicial_results: Option<Vec<JudicialResult>>,
}

/// Back-reference stamped on follow-up offences to the hearing that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedingHearing {
    pub seeding_hearing_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitting_day: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction_type: Option<JurisdictionType>,
}

impl SeedingHearing {
    pub fn new(seeding_hearing_id: Uuid) -> Self {
        Self {
            seeding_hearing_id,
            sitting_day: None,
            jurisdiction_type: None,
        }
    }

    /// Seed from a resulted hearing.
    ///
    /// Only the first hearing day is used as the seed date. This is wrong for
    /// multi-day hearings but downstream listing still relies on it.
    pub fn from_hearing(hearing: &Hearing) -> Self {
        Self {
            seeding_hearing_id: hearing.id,
            sitting_day: hearing
                .hearing_days
                .first()
                .map(|day| day.sitting_day.date_naive()),
            jurisdiction_type: Some(hearing.jurisdiction_type),
        }
    }
}

/// The list a follow-up hearing should be placed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeOfList {
    pub id: Uuid,
    pub description: String,
}

/// One bundle of outcomes that all need the same kind of unscheduled follow-up hearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingUnscheduledListingNeeds {
    pub id: Uuid,
    pub jurisdiction_type: JurisdictionType,
    pub type_of_list: TypeOfList,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecution_cases: Option<Vec<ProsecutionCase>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_applications: Option<Vec<CourtApplication>>,
}

impl HearingUnscheduledListingNeeds {
    pub fn offences(&self) -> impl Iterator<Item = &Offence> {
        self.prosecution_cases
            .iter()
            .flatten()
            .flat_map(|case| case.defendants.iter())
            .flat_map(|defendant| defendant.offences.iter())
    }

    pub fn applications(&self) -> impl Iterator<Item = &CourtApplication> {
        self.court_applications.iter().flatten()
    }
}
