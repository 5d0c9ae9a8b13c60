//! Binder Merge - MTG binder exports to Moxfield
//!
//! Reads the CSV exports in a binder directory, merges identical cards into
//! counted rows, looks up each card's name on Scryfall (cached in a JSON
//! file) and appends the result to a Moxfield collection import CSV.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod io;
pub mod merge;
pub mod models;
pub mod pipeline;

// Re-export commonly used items
pub use api::{ScryfallCard, ScryfallClient};
pub use cache::{resolve_card, NameCache, ResolvedCard};
pub use config::Config;
pub use error::{ApiError, ApiResult, BinderError, Result};
pub use export::{append_row, MoxfieldRow};
pub use io::{read_binder_dir, read_csv};
pub use merge::{merge_same_cards, MergedCards};
pub use models::Card;
pub use pipeline::{run, run_with_client, RunSummary};
