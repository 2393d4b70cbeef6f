//! Discord implementation of the chat service, built on `serenity`.

use std::{num::NonZeroU64, sync::Arc};

use async_trait::async_trait;
use serenity::{
    client::{Client, Context, EventHandler},
    http::Http,
    model::{
        channel::Message,
        gateway::{GatewayIntents, Ready},
        id::ChannelId,
    },
};
use tracing::{debug, info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    interaction::direct_message::{self, DirectMessage},
    report::registry::SessionRegistry,
    service::lookup::LookupClient,
};

use super::{ChatClient, GenericChatClient};

// Extra methods on `ChatClient` applied by the discord implementation.

impl ChatClient {
    /// Creates a new Discord chat client.
    pub fn discord(config: &Config, sessions: SessionRegistry) -> Res<Self> {
        let client = DiscordChatClient::new(config, sessions)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

impl From<DiscordChatClient> for ChatClient {
    fn from(client: DiscordChatClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// Gateway event handler; holds what the report flow needs per message.
struct DiscordHandler {
    config: Config,
    sessions: SessionRegistry,
    chat: ChatClient,
}

/// Discord client implementation.
#[derive(Clone)]
struct DiscordChatClient {
    config: Config,
    http: Arc<Http>,
    sessions: SessionRegistry,
}

impl DiscordChatClient {
    /// Create a new Discord chat client.
    #[instrument(name = "DiscordChatClient::new", skip_all)]
    pub fn new(config: &Config, sessions: SessionRegistry) -> Res<Self> {
        let http = Arc::new(Http::new(&config.discord_token));

        Ok(Self {
            config: config.clone(),
            http,
            sessions,
        })
    }
}

#[async_trait]
impl GenericChatClient for DiscordChatClient {
    async fn start(&self) -> Void {
        let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::DIRECT_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

        let handler = DiscordHandler {
            config: self.config.clone(),
            sessions: self.sessions.clone(),
            chat: ChatClient::from(self.clone()),
        };

        let mut client = Client::builder(&self.config.discord_token, intents).event_handler(handler).await?;

        // Runs until the gateway connection is closed.
        client.start().await?;

        Ok(())
    }

    #[instrument(skip(self, text))]
    async fn send_message(&self, channel_id: u64, text: &str) -> Void {
        let channel = NonZeroU64::new(channel_id).map(ChannelId::from).ok_or(anyhow::anyhow!("Invalid channel ID: {}", channel_id))?;

        let _ = channel.say(&self.http, text).await.map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?;

        Ok(())
    }
}

// Helpers.

/// Whether a gateway message should reach the report flow.
///
/// Bots, including ourselves, are never answered. Guild messages are answered
/// only when `dm_only` is off.
fn should_handle(is_bot: bool, in_guild: bool, dm_only: bool) -> bool {
    !is_bot && !(in_guild && dm_only)
}

// Gateway callbacks for Discord.

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn message(&self, ctx: Context, msg: Message) {
        if !should_handle(msg.author.bot, msg.guild_id.is_some(), self.config.dm_only) {
            debug!("Skipping message that is not for the report flow.");
            return;
        }

        let message = DirectMessage {
            author_id: msg.author.id.get(),
            channel_id: msg.channel_id.get(),
            content: msg.content,
        };

        direct_message::handle_direct_message(message, self.sessions.clone(), LookupClient::discord(&ctx), self.chat.clone());
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

// Tests.
