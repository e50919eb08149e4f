//! Output rendering for the CLI.

mod json;
mod text;

pub use json::{timestamped_filename, write_export};
pub use text::TextFormatter;
