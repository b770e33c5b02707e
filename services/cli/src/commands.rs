use hearing_listing::config::AppConfig;
use hearing_listing::error::AppError;
use hearing_listing::outcomes::{
    convert_to_hearing, extract_booking_references, transform_hearing,
    transform_with_seed_hearing, Hearing, HearingUnscheduledListingNeeds,
    ResultedHearingProcessor, SeedingHearing,
};
use tracing::info;

use crate::cli::{InputArgs, SeededArgs};
use crate::infra::{read_hearing, write_json};

pub(crate) fn classify(config: &AppConfig, args: SeededArgs) -> Result<(), AppError> {
    let hearing = read_hearing(args.input.input.as_deref())?;
    let seed = processor(config, &args).resolve_seed(&hearing, explicit_seed(&args).as_ref());
    let needs = listing_needs(&hearing, seed.as_ref());
    info!(
        hearing_id = %hearing.id,
        jurisdiction = hearing.jurisdiction_type.label(),
        count = needs.len(),
        "classified listing needs"
    );
    write_json(&config.output, &needs)
}

pub(crate) fn bookings(config: &AppConfig, args: InputArgs) -> Result<(), AppError> {
    let hearing = read_hearing(args.input.as_deref())?;
    let references = extract_booking_references(&hearing);
    info!(hearing_id = %hearing.id, count = references.len(), "collected booking references");
    write_json(&config.output, &references)
}

pub(crate) fn process(config: &AppConfig, args: SeededArgs) -> Result<(), AppError> {
    let hearing = read_hearing(args.input.input.as_deref())?;
    let processed = processor(config, &args).process(&hearing, explicit_seed(&args).as_ref())?;
    write_json(&config.output, &processed)
}

pub(crate) fn follow_up(config: &AppConfig, args: SeededArgs) -> Result<(), AppError> {
    let hearing = read_hearing(args.input.input.as_deref())?;
    let seed = processor(config, &args).resolve_seed(&hearing, explicit_seed(&args).as_ref());
    let follow_ups: Vec<Hearing> = listing_needs(&hearing, seed.as_ref())
        .iter()
        .map(|needs| convert_to_hearing(needs, seed.as_ref()))
        .collect();
    write_json(&config.output, &follow_ups)
}

fn listing_needs(
    hearing: &Hearing,
    seed: Option<&SeedingHearing>,
) -> Vec<HearingUnscheduledListingNeeds> {
    match seed {
        Some(seed) => transform_with_seed_hearing(hearing, seed),
        None => transform_hearing(hearing),
    }
}

fn processor(config: &AppConfig, args: &SeededArgs) -> ResultedHearingProcessor {
    let mut processing = config.processing.clone();
    processing.seed_from_first_sitting_day |= args.seed_from_hearing;
    ResultedHearingProcessor::new(processing)
}

fn explicit_seed(args: &SeededArgs) -> Option<SeedingHearing> {
    args.seed_hearing_id.map(SeedingHearing::new)
}
