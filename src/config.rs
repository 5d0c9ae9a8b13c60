use crate::api::SCRYFALL_API_URL;
use std::path::PathBuf;

pub const DEFAULT_BINDER_DIR: &str = "./binder";
pub const DEFAULT_CACHE_PATH: &str = "./binder/scryfall.json";
pub const DEFAULT_OUTPUT_PATH: &str = "./binder/merged.csv";

/// Paths and endpoint used by a merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the binder CSV exports
    pub binder_dir: PathBuf,
    /// JSON file mapping "set__collector_number" to card names
    pub cache_path: PathBuf,
    /// Moxfield import file rows are appended to
    pub output_path: PathBuf,
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binder_dir: PathBuf::from(DEFAULT_BINDER_DIR),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            api_base_url: SCRYFALL_API_URL.to_string(),
        }
    }
}
