//! Message lookup for report-bot.
//!
//! The report flow needs to confirm that a pasted link points at a message the
//! bot can actually see. This module defines the `GenericLookupClient` trait
//! for that, with a Discord implementation.
//!
//! Every failure is reported as `None`: the caller only ever learns that the
//! guild, channel, or message could not be found, never why.

pub mod discord;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

// Types.

/// A guild the bot is a member of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guild {
    pub id: u64,
    pub name: String,
}

/// A channel inside a [`Guild`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: u64,
    pub guild_id: u64,
    pub name: String,
}

/// The parts of a fetched message the report flow cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundMessage {
    /// Display name of the author.
    pub author: String,
    /// Text content of the message.
    pub body: String,
}

// Traits.

/// Generic lookup trait that clients must implement.
///
/// Implementations are expected to translate transport faults into `None`.
#[async_trait]
pub trait GenericLookupClient: Send + Sync + 'static {
    /// Resolve a guild by id; `None` when the bot is not a member.
    async fn resolve_guild(&self, guild_id: u64) -> Option<Guild>;

    /// Resolve a channel within a guild.
    async fn resolve_channel(&self, guild: &Guild, channel_id: u64) -> Option<Channel>;

    /// Fetch a message from a channel.
    ///
    /// This is the only remote call of the three and may suspend.
    async fn resolve_message(&self, channel: &Channel, message_id: u64) -> Option<FoundMessage>;
}

// Structs.

/// Lookup client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LookupClient {
    inner: Arc<dyn GenericLookupClient>,
}

impl Deref for LookupClient {
    type Target = dyn GenericLookupClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LookupClient {
    pub fn new(inner: Arc<dyn GenericLookupClient>) -> Self {
        Self { inner }
    }
}
