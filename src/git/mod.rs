pub mod branch;
pub mod executor;
pub mod runner;
pub mod status;

// Re-export commonly used items
pub use branch::{current_branch, default_branch, UNKNOWN_BRANCH};
pub use executor::{execute, execute_args};
pub use runner::{CommandRunner, GitRunner, ProcessOutput};
pub use status::{CommandOutcome, Status};
