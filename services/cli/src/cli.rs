use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hearing_listing::config::AppConfig;
use hearing_listing::error::AppError;
use hearing_listing::telemetry;
use uuid::Uuid;

use crate::commands;
use crate::infra::parse_uuid;

#[derive(Parser, Debug)]
#[command(
    name = "hearing-listing",
    about = "Classify resulted court hearings into unscheduled listing needs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the listing needs for every unscheduled outcome
    Classify(SeededArgs),
    /// Print the booking references of already confirmed follow-up hearings
    Bookings(InputArgs),
    /// Print the full decision record for a resulted hearing
    Process(SeededArgs),
    /// Print one follow-up hearing per listing need, stripped of judicial results
    FollowUp(SeededArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct InputArgs {
    /// Hearing JSON document (reads stdin when omitted)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SeededArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,
    /// Stamp follow-up offences with this seeding hearing id
    #[arg(long, value_parser = parse_uuid, conflicts_with = "seed_from_hearing")]
    pub(crate) seed_hearing_id: Option<Uuid>,
    /// Seed follow-up offences from the resulted hearing's first sitting day
    #[arg(long)]
    pub(crate) seed_from_hearing: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Classify(args) => commands::classify(&config, args),
        Command::Bookings(args) => commands::bookings(&config, args),
        Command::Process(args) => commands::process(&config, args),
        Command::FollowUp(args) => commands::follow_up(&config, args),
    }
}
