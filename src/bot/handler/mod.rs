use std::time::Instant;

use serenity::all::{
    Context, EventHandler, Guild, GuildId, GuildMemberUpdateEvent, Member, Ready,
};
use serenity::async_trait;

use crate::util::ready::ReadyGate;

pub mod guild;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    ready: ReadyGate,
    /// The community guild; only its members are chunked into the cache.
    guild_id: GuildId,
    started: Instant,
}

impl Handler {
    /// # Arguments
    /// - `ready` - Gate opened on the first `ready` event
    /// - `guild_id` - The configured community guild
    /// - `started` - Process start, used to report connect latency
    pub fn new(ready: ReadyGate, guild_id: GuildId, started: Instant) -> Self {
        Self {
            ready,
            guild_id,
            started,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.ready, self.started, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(self.guild_id, ctx, guild, is_new).await;
    }

    /// Called when a member is updated in a guild (roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(ctx, old, new, event).await;
    }
}
