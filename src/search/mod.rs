pub mod contact;
pub mod contact_source;
pub mod favorite_store;
pub mod search_listener;
pub mod session;
pub mod state;
