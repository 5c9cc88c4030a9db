//! Widget components for the TUI

mod filter_list;
mod header;
mod json_input;
mod response_view;
mod status_bar;

pub use filter_list::FilterList;
pub use header::MainHeader;
pub use json_input::{ErrorLine, JsonInput, SubmitButton, INPUT_PLACEHOLDER};
pub use response_view::ResponseView;
pub use status_bar::StatusBar;
