//! Caching layer for Scryfall name lookups

pub mod name_cache;

pub use name_cache::{cache_key, resolve_card, NameCache, ResolvedCard};
