// Module declarations
pub mod cli;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{RosterClient, RosterSource};
pub use config::{Config, load_config, save_config};
pub use error::{RosterError, RosterResult};
pub use models::*;
pub use store::{AssignedOrdering, LoadState, RosterStore};
