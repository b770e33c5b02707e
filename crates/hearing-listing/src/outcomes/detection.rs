use tracing::debug;

use super::domain::{CourtApplication, CourtApplicationParty, Hearing, JudicialResult};
use super::reference::{DATE_TO_BE_FIXED_MARKER, SUMMONS_APPROVED};
use super::traversal;

/// Raised when the resulted data cannot support a single lawful answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataValidationError {
    #[error(
        "summons required flag differs across respondents ({required} required, {not_required} not required)"
    )]
    InconsistentSummonsRequired {
        required: usize,
        not_required: usize,
    },
}

/// Whether any outcome anywhere in the hearing asks for a next hearing.
pub fn has_next_hearing_outcome(hearing: &Hearing) -> bool {
    traversal::judicial_results(hearing).any(|result| result.next_hearing.is_some())
}

/// Whether the application itself (not its orders or case links) was resulted as an approved summons.
pub fn is_summons_approved(application: &CourtApplication) -> bool {
    application
        .judicial_results
        .iter()
        .flatten()
        .any(|result| result.judicial_result_type_id == SUMMONS_APPROVED)
}

/// Shared summons-required value of the respondents.
///
/// An empty list needs no summons. Respondents that disagree are rejected
/// rather than resolved by majority.
pub fn is_summons_required_for_respondents(
    respondents: &[CourtApplicationParty],
) -> Result<bool, DataValidationError> {
    let required = respondents
        .iter()
        .filter(|respondent| respondent.summons_required)
        .count();
    let not_required = respondents.len() - required;

    if required > 0 && not_required > 0 {
        debug!(
            required,
            not_required, "respondents disagree on summons required"
        );
        return Err(DataValidationError::InconsistentSummonsRequired {
            required,
            not_required,
        });
    }

    Ok(required > 0)
}

/// Whether the result asks for a next hearing with no fixed date, by flag or by prompt text.
pub fn is_date_to_be_fixed(result: &JudicialResult) -> bool {
    let flagged = result
        .next_hearing
        .as_ref()
        .and_then(|next_hearing| next_hearing.date_to_be_fixed)
        .unwrap_or(false);

    flagged
        || result.judicial_result_prompts.iter().any(|prompt| {
            prompt
                .value
                .to_ascii_lowercase()
                .contains(DATE_TO_BE_FIXED_MARKER)
        })
}
