// Internal modules - not part of public API
pub(crate) mod context;
pub(crate) mod discovery;
pub(crate) mod error;
pub(crate) mod fanout;
pub(crate) mod presenter;
pub(crate) mod progress;
pub(crate) mod registry;
pub(crate) mod stats;

// Constants and settings are read directly by the binary and the tests
pub mod config;


// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
