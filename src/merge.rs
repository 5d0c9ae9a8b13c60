//! Folding identical binder rows into counted cards

use crate::models::Card;
use std::collections::HashMap;

/// Cards keyed by fingerprint, iterated in first-seen order
#[derive(Debug, Default)]
pub struct MergedCards {
    cards: Vec<Card>,
    index: HashMap<String, usize>,
}

impl MergedCards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one copy of `card`, bumping the count of an existing entry
    /// with the same fingerprint instead of storing it again.
    pub fn add(&mut self, card: Card) {
        let fp = card.fingerprint();
        match self.index.get(&fp).copied() {
            Some(i) => self.cards[i].count += 1,
            None => {
                self.index.insert(fp, self.cards.len());
                self.cards.push(card);
            }
        }
    }

    pub fn get(&self, fingerprint: &str) -> Option<&Card> {
        self.index.get(fingerprint).map(|&i| &self.cards[i])
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of all counts, i.e. the number of rows that were added
    pub fn total_count(&self) -> u32 {
        self.cards.iter().map(|c| c.count).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl IntoIterator for MergedCards {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl FromIterator<Card> for MergedCards {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut merged = MergedCards::new();
        for card in iter {
            merged.add(card);
        }
        merged
    }
}

/// Merges raw rows into one entry per fingerprint
pub fn merge_same_cards(cards: Vec<Card>) -> MergedCards {
    cards.into_iter().collect()
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
