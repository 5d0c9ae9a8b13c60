use crate::api::scryfall::ScryfallClient;
use crate::error::{ApiResult, BinderError, Result};
use crate::models::{Card, KEY_SEPARATOR};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Legacy collector number suffix used by old promo print runs
pub const STAR_SUFFIX: char = '★';

/// Persistent cache of canonical card names.
/// Stores "set__collector_number" to name in a JSON file so that each
/// printing is looked up on Scryfall at most once.
#[derive(Debug)]
pub struct NameCache {
    path: PathBuf,
    names: BTreeMap<String, String>,
}

impl NameCache {
    /// Empty cache that will be saved to `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            names: BTreeMap::new(),
        }
    }

    /// Load cache from disk, or create empty if it doesn't exist.
    /// A file that exists but cannot be read or parsed is an error so it
    /// is never overwritten by a fresh cache.
    pub fn load<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "No name cache at {}, starting with an empty one",
                    path.display()
                );
                return Ok(Self::new(path));
            }
            Err(e) => return Err(BinderError::io(&path, e)),
        };
        let names = serde_json::from_str(&content).map_err(|source| BinderError::CacheFormat {
            path: path.clone(),
            source,
        })?;

        let cache = Self { path, names };
        log::info!("Loaded name cache with {} entries", cache.len());
        Ok(cache)
    }

    /// Save cache to disk, replacing the whole file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| BinderError::io(parent, e))?;
            }
        }

        let content = serde_json::to_string_pretty(&self.names).map_err(|source| {
            BinderError::CacheFormat {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, content).map_err(|e| BinderError::io(&self.path, e))?;

        log::debug!("Saved name cache with {} entries", self.names.len());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: String, name: String) {
        self.names.insert(key, name);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Canonical name plus the set and collector number it was found under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCard {
    pub name: String,
    pub set: String,
    pub collector_number: String,
}

/// Generate cache key from set code and collector number
pub fn cache_key(set_code: &str, collector_number: &str) -> String {
    format!("{}{}{}", set_code, KEY_SEPARATOR, collector_number)
}

/// Promo and pre-release prints live in the "p"-prefixed set
pub fn effective_set(card: &Card) -> String {
    if card.is_promo_print() {
        format!("p{}", card.set_code)
    } else {
        card.set_code.clone()
    }
}

/// Collector number as used by current promo prints: "p" for promo,
/// then "s" for pre-release
pub fn effective_collector_number(card: &Card) -> String {
    let mut cn = card.collector_number.clone();
    if card.is_promo {
        cn.push('p');
    }
    if card.is_pre_release {
        cn.push('s');
    }
    cn
}

/// Collector number as used by old promo print runs
pub fn star_collector_number(card: &Card) -> String {
    format!("{}{}", card.collector_number, STAR_SUFFIX)
}

/// Resolve a card's canonical name, checking the cache first.
///
/// Cache misses go to Scryfall. A promo or pre-release print that Scryfall
/// rejects is retried once with the star-suffixed collector number. Only
/// successful lookups are cached, under the key that succeeded.
///
/// The cache is saved after every call, whether the lookup succeeded or
/// not. A lookup error takes precedence over a failed save.
pub fn resolve_card(
    cache: &mut NameCache,
    client: &ScryfallClient,
    card: &Card,
) -> Result<ResolvedCard> {
    let result = resolve_with_fallback(cache, client, card);
    let saved = cache.save();
    match (result, saved) {
        (Err(e), Err(save_err)) => {
            log::error!("Failed to save name cache: {}", save_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(_), Err(e)) => Err(e),
        (Ok(resolved), Ok(())) => Ok(resolved),
    }
}

fn resolve_with_fallback(
    cache: &mut NameCache,
    client: &ScryfallClient,
    card: &Card,
) -> Result<ResolvedCard> {
    let set = effective_set(card);
    let cn = effective_collector_number(card);

    let err = match lookup_variant(cache, client, &set, &cn) {
        Ok(resolved) => return Ok(resolved),
        Err(err) => err,
    };

    if !card.is_promo_print() || !err.is_unsuccessful_response() {
        return Err(BinderError::Lookup {
            key: cache_key(&set, &cn),
            source: err,
        });
    }

    log::debug!("{} not found, trying star collector number", cache_key(&set, &cn));
    let star_cn = star_collector_number(card);
    lookup_variant(cache, client, &set, &star_cn).map_err(|source| BinderError::Lookup {
        key: cache_key(&set, &star_cn),
        source,
    })
}

fn lookup_variant(
    cache: &mut NameCache,
    client: &ScryfallClient,
    set: &str,
    collector_number: &str,
) -> ApiResult<ResolvedCard> {
    let key = cache_key(set, collector_number);

    let name = match cache.get(&key).map(str::to_string) {
        Some(name) => {
            log::debug!("Cache hit for {}", key);
            name
        }
        None => {
            log::info!("Cache miss for {}, fetching from Scryfall", key);
            let card = client.fetch_card(set, collector_number)?;
            cache.insert(key, card.name.clone());
            card.name
        }
    };

    Ok(ResolvedCard {
        name,
        set: set.to_string(),
        collector_number: collector_number.to_string(),
    })
}

#[cfg(test)]
#[path = "name_cache_tests.rs"]
mod tests;
