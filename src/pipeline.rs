//! Full merge run: read exports, merge duplicates, resolve names, append rows

use crate::api::ScryfallClient;
use crate::cache::{resolve_card, NameCache};
use crate::config::Config;
use crate::error::Result;
use crate::export::{append_row, MoxfieldRow};
use crate::io::read_binder_dir;
use crate::merge::merge_same_cards;

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub rows_read: usize,
    pub cards_merged: usize,
    pub rows_written: usize,
}

/// Runs a merge with the given configuration.
///
/// Stops at the first error. Rows already appended and names already
/// cached stay on disk.
pub fn run(config: &Config) -> Result<RunSummary> {
    let client = ScryfallClient::with_base_url(&config.api_base_url);
    run_with_client(config, &client)
}

/// Same as [`run`] with a caller-provided client
pub fn run_with_client(config: &Config, client: &ScryfallClient) -> Result<RunSummary> {
    let cards = read_binder_dir(&config.binder_dir, Some(config.output_path.as_path()))?;
    let rows_read = cards.len();
    log::info!(
        "Read {} rows from {}",
        rows_read,
        config.binder_dir.display()
    );

    let merged = merge_same_cards(cards);
    let cards_merged = merged.len();
    log::info!("Merged into {} distinct cards", cards_merged);

    let mut cache = NameCache::load(&config.cache_path)?;

    let mut rows_written = 0;
    for card in merged.iter() {
        let resolved = resolve_card(&mut cache, client, card)?;
        append_row(&config.output_path, &MoxfieldRow::new(card, &resolved))?;
        rows_written += 1;
    }

    let summary = RunSummary {
        rows_read,
        cards_merged,
        rows_written,
    };
    log::info!(
        "Wrote {} rows to {}",
        summary.rows_written,
        config.output_path.display()
    );
    Ok(summary)
}
