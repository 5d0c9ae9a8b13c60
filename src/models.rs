/// Separator used in fingerprints and cache keys
pub const KEY_SEPARATOR: &str = "__";

/// One physical card (or a stack of identical ones) from a binder export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub collector_number: String,
    pub set_code: String,
    pub language: String,
    pub is_foil: bool,
    pub is_etched: bool,
    pub is_pre_release: bool,
    pub is_promo: bool,
    /// Number of copies sharing this identity
    pub count: u32,
}

impl Card {
    /// Identity key used to merge duplicate rows.
    ///
    /// Set, collector number and language always contribute; each print
    /// variant flag adds a fixed token only when it is set. The reader
    /// rejects fields containing the separator, so distinct cards never
    /// share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut parts: Vec<&str> = vec![
            self.set_code.as_str(),
            self.collector_number.as_str(),
            self.language.as_str(),
        ];
        if self.is_foil {
            parts.push("foil");
        }
        if self.is_etched {
            parts.push("etched");
        }
        if self.is_pre_release {
            parts.push("pre");
        }
        if self.is_promo {
            parts.push("promo");
        }
        parts.join(KEY_SEPARATOR)
    }

    /// Returns true if this card lives in a promo set on Scryfall
    pub fn is_promo_print(&self) -> bool {
        self.is_promo || self.is_pre_release
    }

    /// Foil column value for the Moxfield import.
    /// Pre-release prints are always foil stamped.
    pub fn foil_state(&self) -> &'static str {
        if self.is_foil || self.is_pre_release {
            "foil"
        } else if self.is_etched {
            "etched"
        } else {
            ""
        }
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
