//! Producers of venue records.
//!
//! The remote fetcher (paginated search, retries, redirect reconciliation)
//! lives outside this crate. It writes a JSON array of venue records, which
//! [`JsonFileSource`] reads back. Anything else that can hand over venues
//! implements [`VenueSource`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TastyPairError};
use crate::menu::venue::{Venue, json_kind};

/// Default location of the fetched venue dump.
pub const DEFAULT_INPUT_PATH: &str = "menus.json";

/// A producer of venue records.
pub trait VenueSource {
    /// Produce every venue of the corpus.
    fn venues(&mut self) -> Result<Vec<Venue>>;

    /// Get the name of this source (for logging).
    fn name(&self) -> &str;
}

impl VenueSource for Vec<Venue> {
    fn venues(&mut self) -> Result<Vec<Venue>> {
        Ok(std::mem::take(self))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Outcome of decoding a venue dump.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Venues decoded successfully.
    pub decoded: usize,
    /// Array elements skipped because they were not venue-shaped.
    pub skipped: usize,
}

/// Reads the JSON array of venues written by the fetcher.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
    last_report: Option<LoadReport>,
}

impl Default for JsonFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH)
    }
}

impl JsonFileSource {
    /// Create a source reading from the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileSource {
            path: path.as_ref().to_path_buf(),
            last_report: None,
        }
    }

    /// Path of the venue dump.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Report from the most recent load, if any.
    pub fn last_report(&self) -> Option<LoadReport> {
        self.last_report
    }

    /// Read and decode the file.
    pub fn load(&self) -> Result<(Vec<Venue>, LoadReport)> {
        let file = File::open(&self.path).map_err(|e| {
            TastyPairError::input(format!("Cannot open {}: {e}", self.path.display()))
        })?;
        read_venues(BufReader::new(file))
    }
}

impl VenueSource for JsonFileSource {
    fn venues(&mut self) -> Result<Vec<Venue>> {
        let (venues, report) = self.load()?;
        self.last_report = Some(report);
        Ok(venues)
    }

    fn name(&self) -> &str {
        "json_file"
    }
}

/// Decode a venue dump from a reader.
pub fn read_venues<R: Read>(reader: R) -> Result<(Vec<Venue>, LoadReport)> {
    let value: Value = serde_json::from_reader(reader)?;
    decode_venues(value)
}

/// Decode a parsed venue dump.
///
/// The top level must be an array. Each element is decoded on its own; an
/// element that is not an object is skipped with a warning and contributes
/// nothing. Wrong-shaped fields inside a venue only lose that field.
pub fn decode_venues(value: Value) -> Result<(Vec<Venue>, LoadReport)> {
    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(TastyPairError::input(format!(
                "Expected a JSON array of venues, found {}",
                json_kind(&other)
            )));
        }
    };

    let mut report = LoadReport::default();
    let mut venues = Vec::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        if !element.is_object() {
            report.skipped += 1;
            warn!(
                "Skipping venue at index {index}: expected an object, found {}",
                json_kind(&element)
            );
            continue;
        }

        match serde_json::from_value::<Venue>(element) {
            Ok(venue) => {
                report.decoded += 1;
                venues.push(venue);
            }
            Err(e) => {
                report.skipped += 1;
                warn!("Skipping malformed venue at index {index}: {e}");
            }
        }
    }

    debug!(
        "Decoded {} venues ({} skipped)",
        report.decoded, report.skipped
    );

    Ok((venues, report))
}
