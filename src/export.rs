//! Moxfield collection import rows

use crate::cache::ResolvedCard;
use crate::error::{BinderError, Result};
use crate::models::Card;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;

/// One row of a Moxfield collection CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoxfieldRow {
    #[serde(rename = "Count")]
    pub count: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Edition")]
    pub edition: String,
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Foil")]
    pub foil: String,
    #[serde(rename = "Collector Number")]
    pub collector_number: String,
    #[serde(rename = "Alter")]
    pub alter: String,
    #[serde(rename = "Proxy")]
    pub proxy: String,
    #[serde(rename = "Purchase Price")]
    pub purchase_price: String,
}

impl MoxfieldRow {
    /// Builds the import row for a merged card. Condition is always near
    /// mint; alter, proxy and price are not tracked by the binder exports.
    pub fn new(card: &Card, resolved: &ResolvedCard) -> Self {
        Self {
            count: card.count.to_string(),
            name: resolved.name.clone(),
            edition: resolved.set.clone(),
            condition: "NM".to_string(),
            language: card.language.clone(),
            foil: card.foil_state().to_string(),
            collector_number: resolved.collector_number.clone(),
            alter: "FALSE".to_string(),
            proxy: "FALSE".to_string(),
            purchase_price: String::new(),
        }
    }
}

/// Appends one row to the output file, creating it if needed.
/// The header is written only when the file is empty.
pub fn append_row(path: &Path, row: &MoxfieldRow) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| BinderError::io(parent, e))?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BinderError::io(path, e))?;
    let is_new = file.metadata().map_err(|e| BinderError::io(path, e))?.len() == 0;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);
    wtr.serialize(row).map_err(|e| BinderError::csv(path, e))?;
    wtr.flush().map_err(|e| BinderError::io(path, e))?;

    log::debug!("Appended {} x {} to {}", row.count, row.name, path.display());
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
