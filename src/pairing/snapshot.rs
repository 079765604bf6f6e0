//! Read-only view of a finished pairing store.
//!
//! The snapshot serializes to exactly four top-level JSON fields:
//!
//! ```json
//! {
//!   "ingredients": {"a": 1, "b": 2, "c": 1},
//!   "pairings": {"a": {"b": 1}, "b": {"a": 1, "c": 1}, "c": {"b": 1}},
//!   "total_ingredients": 4,
//!   "total_pairings": 2
//! }
//! ```
//!
//! All maps are `BTreeMap`s, so keys are emitted in sorted order and output
//! is reproducible across runs.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pairing::store::PairingStore;

/// Raw counts recorded by a [`PairingStore`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingSnapshot {
    /// Token -> number of items containing it.
    pub ingredients: BTreeMap<String, u64>,
    /// Token -> token -> number of items containing both (symmetric).
    pub pairings: BTreeMap<String, BTreeMap<String, u64>>,
    /// Token occurrences processed, one per token per item.
    pub total_ingredients: u64,
    /// Candidate pairs examined.
    pub total_pairings: u64,
}

impl From<&PairingStore> for PairingSnapshot {
    fn from(store: &PairingStore) -> Self {
        store.snapshot()
    }
}

impl PairingSnapshot {
    /// Item frequency of a token (zero if never seen).
    pub fn ingredient_count(&self, token: &str) -> u64 {
        self.ingredients.get(token).copied().unwrap_or(0)
    }

    /// Co-occurrence count of two tokens (zero if never seen together).
    pub fn pairing_count(&self, a: &str, b: &str) -> u64 {
        self.pairings
            .get(a)
            .and_then(|partners| partners.get(b))
            .copied()
            .unwrap_or(0)
    }

    /// Read a snapshot previously written as JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a snapshot from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write JSON (followed by a newline) to a writer.
    pub fn write_json<W: Write>(&self, mut writer: W, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write JSON to a file, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        self.write_json(BufWriter::new(file), pretty)
    }
}
