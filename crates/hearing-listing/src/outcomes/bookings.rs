use std::collections::BTreeSet;

use uuid::Uuid;

use super::domain::Hearing;
use super::traversal;

/// Distinct booking references of follow-up hearings that listing has already confirmed.
pub fn extract_booking_references(hearing: &Hearing) -> BTreeSet<Uuid> {
    traversal::judicial_results(hearing)
        .filter_map(|result| result.next_hearing.as_ref())
        .filter_map(|next_hearing| next_hearing.booking_reference)
        .collect()
}
