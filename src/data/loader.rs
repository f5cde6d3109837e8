use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::ComparisonRecord;

pub const DEFAULT_PAIRS_PATH: &str = "pairs_close.json";

/// The record file could not be turned into a usable record set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} must contain at least one record", .path.display())]
    Empty { path: PathBuf },
}

pub fn load_records_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<ComparisonRecord>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<ComparisonRecord> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if records.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), records = records.len(), "loaded comparison records");
    Ok(records)
}
