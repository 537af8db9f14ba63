// ABOUTME: Command module aggregator for the crxdeploy CLI.
// ABOUTME: Re-exports deploy, clean, and status command handlers.

mod clean;
mod deploy;
mod status;

pub use clean::clean;
pub use deploy::deploy;
pub use status::status;
