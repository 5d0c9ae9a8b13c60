use crate::error::{BinderError, Result};
use crate::models::{Card, KEY_SEPARATOR};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One row of a binder export. Flag columns only matter by presence.
#[derive(Debug, Deserialize)]
struct BinderRow {
    number: String,
    set: String,
    lang: String,
    #[serde(default)]
    foil: String,
    #[serde(default)]
    etched: String,
    #[serde(default, rename = "pre release")]
    pre_release: String,
    #[serde(default)]
    promo: String,
}

fn is_marked(cell: &str) -> bool {
    !cell.trim().is_empty()
}

/// Fingerprints and cache keys join fields with the separator, so it
/// cannot appear inside one.
fn check_field(path: &Path, column: &'static str, value: &str) -> Result<()> {
    if value.contains(KEY_SEPARATOR) {
        return Err(BinderError::InvalidField {
            path: path.to_path_buf(),
            column,
            value: value.to_string(),
        });
    }
    Ok(())
}

impl BinderRow {
    fn into_card(self, path: &Path) -> Result<Card> {
        check_field(path, "number", &self.number)?;
        check_field(path, "set", &self.set)?;
        check_field(path, "lang", &self.lang)?;

        Ok(Card {
            collector_number: self.number,
            set_code: self.set,
            language: self.lang,
            is_foil: is_marked(&self.foil),
            is_etched: is_marked(&self.etched),
            is_pre_release: is_marked(&self.pre_release),
            is_promo: is_marked(&self.promo),
            count: 1,
        })
    }
}

/// Reads a single binder export. Every data row becomes one card with count 1.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Card>> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .map_err(|e| BinderError::csv(path, e))?;

    let mut cards = Vec::new();
    for result in rdr.deserialize() {
        let row: BinderRow = result.map_err(|e| BinderError::csv(path, e))?;
        cards.push(row.into_card(path)?);
    }

    Ok(cards)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Lists the CSV exports in `dir` in sorted order, leaving out `exclude`.
pub fn list_exports(dir: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| BinderError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| BinderError::io(dir, e))?.path();
        if !path.is_file() || !is_csv(&path) {
            continue;
        }
        if exclude.is_some_and(|excluded| same_file(&path, excluded)) {
            log::debug!("Skipping output file {}", path.display());
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    Ok(paths)
}

/// Reads every CSV export in `dir`. Any unreadable file aborts the whole read.
pub fn read_binder_dir(dir: &Path, exclude: Option<&Path>) -> Result<Vec<Card>> {
    let mut cards = Vec::new();

    for path in list_exports(dir, exclude)? {
        let file_cards = read_csv(&path)?;
        log::info!("Read {} rows from {}", file_cards.len(), path.display());
        cards.extend(file_cards);
    }

    Ok(cards)
}
