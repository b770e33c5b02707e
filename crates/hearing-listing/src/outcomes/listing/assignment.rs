use uuid::Uuid;

use super::super::domain::JudicialResult;
use super::super::reference::{
    NEXT_HEARING_CROWN_DATE_TO_BE_FIXED, STAND_ALONE_CASE, STAND_ALONE_CASE_LABEL_SUFFIX,
};

/// Listing type chosen for one offence or application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListingAssignment<'a> {
    pub type_id: Uuid,
    pub label: &'a str,
    pub stand_alone_case: bool,
}

impl ListingAssignment<'_> {
    pub fn description(&self) -> String {
        if self.stand_alone_case {
            format!("{}{}", self.label, STAND_ALONE_CASE_LABEL_SUFFIX)
        } else {
            self.label.to_string()
        }
    }
}

fn requires_unscheduled_listing(result: &JudicialResult) -> bool {
    result.is_unscheduled || result.judicial_result_type_id == NEXT_HEARING_CROWN_DATE_TO_BE_FIXED
}

/// First qualifying result in recorded order wins; type priority plays no part.
pub(crate) fn assign(results: &[JudicialResult]) -> Option<ListingAssignment<'_>> {
    let selected = results
        .iter()
        .find(|result| requires_unscheduled_listing(result))?;

    let stand_alone_case = selected.judicial_result_type_id == NEXT_HEARING_CROWN_DATE_TO_BE_FIXED
        && results
            .iter()
            .any(|result| result.judicial_result_type_id == STAND_ALONE_CASE);

    Some(ListingAssignment {
        type_id: selected.judicial_result_type_id,
        label: &selected.label,
        stand_alone_case,
    })
}
