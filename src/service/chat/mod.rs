//! Chat service integration for report-bot.
//!
//! This module provides functionality for interacting with chat platforms like Discord:
//! - Receiving direct messages and forwarding them to the report flow
//! - Sending reply lines back to the user
//!
//! It defines the `GenericChatClient` trait that can be implemented for different
//! chat services, with a default implementation for Discord.

pub mod discord;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Void;

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the core functionality for interacting with chat platforms
/// like Discord. Implementing this trait allows different chat services to be used
/// with the report-bot.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Start the chat client listener.
    ///
    /// This connects to the chat platform and begins forwarding incoming
    /// messages to the report flow. It returns when the connection ends.
    async fn start(&self) -> Void;

    /// Send a message to a channel.
    ///
    /// Each reply line produced by a report session is sent as its own message,
    /// in order.
    async fn send_message(&self, channel_id: u64, text: &str) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
