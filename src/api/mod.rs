//! API client for the Scryfall card database

pub mod scryfall;

pub use scryfall::{ScryfallCard, ScryfallClient, SCRYFALL_API_URL};
