use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use hearing_listing::config::OutputConfig;
use hearing_listing::error::AppError;
use hearing_listing::outcomes::Hearing;
use serde::Serialize;
use uuid::Uuid;

pub(crate) fn parse_uuid(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("failed to parse '{raw}' as a UUID ({err})"))
}

/// Deserialize a resulted hearing from a file, or stdin when no path is given.
pub(crate) fn read_hearing(path: Option<&Path>) -> Result<Hearing, AppError> {
    let hearing: Hearing = match path {
        Some(path) => {
            let file = File::open(path).map_err(|err| {
                AppError::InvalidArgument(format!("cannot open {}: {err}", path.display()))
            })?;
            serde_json::from_reader(BufReader::new(file))?
        }
        None => {
            let mut raw = String::new();
            io::stdin().lock().read_to_string(&mut raw)?;
            serde_json::from_str(&raw)?
        }
    };

    Ok(hearing)
}

pub(crate) fn write_json<T: Serialize>(output: &OutputConfig, value: &T) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if output.pretty {
        serde_json::to_writer_pretty(&mut handle, value)?;
    } else {
        serde_json::to_writer(&mut handle, value)?;
    }
    writeln!(handle)?;
    Ok(())
}
