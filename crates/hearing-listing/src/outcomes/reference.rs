//! Result definitions from reference data that the engine treats specially.

use uuid::{uuid, Uuid};

/// Next hearing in the Crown Court, date and time to be fixed.
pub const NEXT_HEARING_CROWN_DATE_TO_BE_FIXED: Uuid =
    uuid!("fbed768b-ee95-4434-87c8-e81cbc8d24c8");

/// Stand alone case.
pub const STAND_ALONE_CASE: Uuid = uuid!("3d2c05b3-fcd6-49c2-b5a9-52855be7f90a");

/// Summons application approved.
pub const SUMMONS_APPROVED: Uuid = uuid!("5002d600-af66-11e8-b568-0800200c9a66");

/// Appended to the NHCCS label when a stand alone case result sits alongside it.
pub const STAND_ALONE_CASE_LABEL_SUFFIX: &str = " / SAC";

/// Prompt text marking a next hearing whose date has not been fixed.
pub const DATE_TO_BE_FIXED_MARKER: &str = "date and time to be fixed";
