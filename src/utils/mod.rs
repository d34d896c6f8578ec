pub(crate) mod fs;
pub(crate) mod logger;
pub(crate) mod terminal;

// Public API - utilities used by commands and the binary
pub use fs::{display_name, shorten_path};
pub use logger::init_logger;
pub use terminal::{set_terminal_title, set_terminal_title_and_flush};
