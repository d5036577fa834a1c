pub mod core;
pub mod hangul;
pub mod search;

pub use crate::core::{
    error::{self, Error},
    config::{self, Config},
    default_configuration as configuration,
};

pub use crate::hangul::{
    chosung::{self, chosung_of, is_leading_consonant, LEADING_CONSONANTS},
    matcher::{self, is_chosung_query, matches, matches_name},
};

pub use crate::search::{
    contact::{Contact, ContactBuilder},
    contact_source::{ContactSource, JsonFileSource},
    favorite_store::{FavoriteStore, MemoryFavoriteStore},
    search_listener::SearchListener,
    session::{SearchSession, SearchSessionBuilder},
    state::{LoadState, SearchSnapshot, SearchState},
};
