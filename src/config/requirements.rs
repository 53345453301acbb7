//! Raw requirement data as stored on disk

use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Course code to raw requirement text, e.g. `{"COMP1521": "COMP1511"}`
///
/// A `null` requirement is read as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RequirementData {
    entries: BTreeMap<String, Option<String>>,
}

impl RequirementData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate (course, text) pairs in course order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(course, text)| (course.as_str(), text.as_deref().unwrap_or("")))
    }
}
