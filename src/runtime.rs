//! Runtime services and shared state for the report-bot.

use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    report::registry::SessionRegistry,
    service::chat::ChatClient,
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the session registry, chat client, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The in-flight report sessions.
    pub sessions: SessionRegistry,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        let sessions = SessionRegistry::new();

        // Initialize the discord client.
        let chat = ChatClient::discord(&config, sessions.clone())?;

        Ok(Self { config, sessions, chat })
    }

    /// Connect to the gateway and serve reports until the connection closes.
    pub async fn start(&self) -> Void {
        info!(dm_only = self.config.dm_only, "Starting report-bot.");

        let result = self.chat.start().await;

        info!("Gateway closed with {} report(s) in progress.", self.sessions.len().await);

        result
    }
}
