pub mod chosung;
pub mod matcher;
