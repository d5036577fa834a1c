use crate::search::state::SearchSnapshot;

pub trait SearchListener: Send {
    fn on_view_changed(&self, _snapshot: &SearchSnapshot) {}
    fn on_load_failed(&self, _message: &str) {}
}
