use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Autobot,
    Decepticon,
}

impl Team {
    /// Exact match on the `Team` column; anything else is not a character row.
    pub fn parse(value: &str) -> Option<Team> {
        match value {
            "Autobot" => Some(Team::Autobot),
            "Decepticon" => Some(Team::Decepticon),
            _ => None,
        }
    }
}

/// One line of the translations table. Empty cells and missing columns decode as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanionRow {
    #[serde(rename = "US Name", default)]
    pub us_name: Option<String>,
    #[serde(rename = "RU Name", default)]
    pub ru_name: Option<String>,
    #[serde(rename = "Team", default)]
    pub team: Option<String>,
    #[serde(rename = "Season", default)]
    pub season: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
}

pub fn read_rows<R: Read>(reader: R) -> Result<Vec<CompanionRow>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut rows = Vec::new();
    for (idx, record) in rdr.deserialize().enumerate() {
        // +2: header line, 1-based
        let row: CompanionRow = record.with_context(|| format!("malformed CSV row at line {}", idx + 2))?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn load_rows(path: &Path) -> Result<Vec<CompanionRow>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_rows(file).with_context(|| format!("failed to read {}", path.display()))
}
