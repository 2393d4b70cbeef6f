//! Library root for `report-bot`.
//!
//! Report-bot is a Discord assistant that walks users through filing a report
//! about a message:
//! - The user says `report` in a direct message and pastes a message link
//! - The bot finds the message and asks why it is being reported
//! - Targeted misinformation is refined by group and a requested action
//! - The finished report is logged for moderators
//!
//! The conversation itself lives in [`report`] and is independent of Discord;
//! the chat transport and message lookup are services behind traits.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod report;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the report-bot runtime:
/// - Creates the runtime context with the session registry and chat client
/// - Starts the gateway connection for processing messages
pub async fn start(config: Config) -> Void {
    info!("Starting report-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
