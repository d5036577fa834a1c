use std::collections::HashSet;
use std::fmt;

use crate::{
    hangul::matcher,
    search::contact::Contact,
};

/// Tri-state of the contact-list load, tracked independently of the view.
/// While a load is running the previously computed view stays visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Idle         => write!(f, "idle"),
            LoadState::Loading      => write!(f, "loading"),
            LoadState::Failed(msg)  => write!(f, "failed: {}", msg),
        }
    }
}

/// One self-consistent derived view: the query-matched, favorite-annotated
/// contact list plus the fields the presentation layer reads alongside it.
/// Snapshots are immutable values, never updated in place.
#[derive(Debug, Clone, Default)]
pub struct SearchSnapshot {
    contacts    : Vec<Contact>,
    query       : String,
    load_state  : LoadState,
    error       : Option<String>,
}

impl SearchSnapshot {
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// The query exactly as the user typed it, untrimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// The three independently-changing inputs and the rules that combine
/// them. A plain single-threaded reducer: every setter replaces one input
/// wholesale, and `snapshot` recomputes the derived view from the latest
/// values, so the view can never mix inputs from different instants.
pub struct SearchState {
    contacts    : Vec<Contact>,         // deduped, sorted by name.
    favorites   : HashSet<String>,      // read-only mirror of the store.
    query       : String,
    load_state  : LoadState,
    error       : Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            contacts    : Vec::new(),
            favorites   : HashSet::new(),
            query       : String::new(),
            load_state  : LoadState::Idle,
            error       : None,
        }
    }

    /// Replaces the raw contact list. Duplicate ids collapse to the
    /// first-seen record; the working set is kept sorted by display name.
    pub fn set_contacts(&mut self, contacts: Vec<Contact>) {
        let mut seen = HashSet::with_capacity(contacts.len());
        let mut unique = Vec::with_capacity(contacts.len());

        for contact in contacts {
            if seen.insert(contact.id().to_string()) {
                unique.push(contact);
            }
        }
        unique.sort_by(|a, b| a.name().cmp(b.name()));

        self.contacts = unique;
    }

    /// Replaces the favorite-id mirror with a snapshot from the store.
    pub fn set_favorites(&mut self, favorites: HashSet<String>) {
        self.favorites = favorites;
    }

    /// Stores the query verbatim; trimming and classification happen in
    /// the matcher at filter time.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
        self.error = None;
    }

    pub fn finish_load(&mut self, contacts: Vec<Contact>) {
        self.set_contacts(contacts);
        self.load_state = LoadState::Idle;
    }

    /// Keeps the previously loaded contacts visible; only the state and
    /// the user-facing message change.
    pub fn fail_load(&mut self, message: &str) {
        self.load_state = LoadState::Failed(message.to_string());
        self.error = Some(message.to_string());
    }

    pub fn set_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        if let LoadState::Failed(_) = self.load_state {
            self.load_state = LoadState::Idle;
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Recomputes the derived view: join with the favorite set, filter
    /// with the chosung-aware matcher. Always a fresh value reflecting
    /// the latest (contacts, favorites, query) triple.
    pub fn snapshot(&self) -> SearchSnapshot {
        let contacts = self.contacts.iter()
            .filter(|v| matcher::matches(v.name(), v.phone_number(), &self.query))
            .map(|v| {
                let mut contact = v.clone();
                contact.set_favorite(self.favorites.contains(v.id()));
                contact
            })
            .collect::<Vec<_>>();

        SearchSnapshot {
            contacts,
            query       : self.query.clone(),
            load_state  : self.load_state.clone(),
            error       : self.error.clone(),
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
