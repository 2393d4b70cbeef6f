//! Discord implementation of the lookup capability.
//!
//! Guilds and channels come from the gateway cache, so they are only visible
//! once the bot has received the guild over the gateway. Messages are fetched
//! over HTTP.

use std::{num::NonZeroU64, sync::Arc};

use async_trait::async_trait;
use serenity::{
    cache::Cache,
    client::Context,
    http::Http,
    model::id::{ChannelId, GuildId, MessageId},
};
use tracing::{debug, instrument, warn};

use super::{Channel, FoundMessage, Guild, GenericLookupClient, LookupClient};

// Extra methods on `LookupClient` applied by the discord implementation.

impl LookupClient {
    /// Creates a lookup client backed by the cache and HTTP client of an event context.
    pub fn discord(ctx: &Context) -> Self {
        Self::from(DiscordLookupClient::new(ctx.cache.clone(), ctx.http.clone()))
    }
}

impl From<DiscordLookupClient> for LookupClient {
    fn from(client: DiscordLookupClient) -> Self {
        Self::new(Arc::new(client))
    }
}

// Structs.

/// Discord lookup client implementation.
#[derive(Clone)]
pub struct DiscordLookupClient {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl DiscordLookupClient {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }
}

#[async_trait]
impl GenericLookupClient for DiscordLookupClient {
    #[instrument(skip(self))]
    async fn resolve_guild(&self, guild_id: u64) -> Option<Guild> {
        let id = GuildId::from(NonZeroU64::new(guild_id)?);
        let guild = self.cache.guild(id)?;

        Some(Guild { id: guild_id, name: guild.name.clone() })
    }

    #[instrument(skip(self, guild), fields(guild_id = guild.id))]
    async fn resolve_channel(&self, guild: &Guild, channel_id: u64) -> Option<Channel> {
        let guild_id = GuildId::from(NonZeroU64::new(guild.id)?);
        let id = ChannelId::from(NonZeroU64::new(channel_id)?);

        let cached = self.cache.guild(guild_id)?;
        let channel = cached.channels.get(&id)?;

        Some(Channel {
            id: channel_id,
            guild_id: guild.id,
            name: channel.name.clone(),
        })
    }

    #[instrument(skip(self, channel), fields(channel_id = channel.id))]
    async fn resolve_message(&self, channel: &Channel, message_id: u64) -> Option<FoundMessage> {
        let channel_id = ChannelId::from(NonZeroU64::new(channel.id)?);
        let id = MessageId::from(NonZeroU64::new(message_id)?);

        match channel_id.message(&self.http, id).await {
            Ok(message) => {
                debug!("Fetched message `{}`.", message_id);

                Some(FoundMessage {
                    author: message.author.name,
                    body: message.content,
                })
            }
            Err(err) => {
                warn!("Failed to fetch message `{}`: {}", message_id, err);
                None
            }
        }
    }
}
