//! TUI views

mod form_view;
mod list_view;

pub use form_view::FormView;
pub use list_view::ListView;
