//! Guild create handler.
//!
//! `GUILD_CREATE` only carries the bot itself and members in voice. Member
//! updates can only be diffed for cached members, so the configured guild is
//! chunked as soon as it becomes available and every member lands in the cache
//! before their roles change.

use serenity::all::{ChunkGuildFilter, Context, Guild, GuildId};

use crate::bot::handler::member::RoleSync;

/// Handles the guild_create event by requesting all members of the configured
/// guild when role sync is enabled.
pub async fn handle_guild_create(
    scope: GuildId,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    if !ctx.data.read().await.contains_key::<RoleSync>() {
        return;
    }

    if !needs_member_chunk(&guild, scope) {
        return;
    }

    tracing::info!(
        "Requesting {} members of guild {} ({} cached)",
        guild.member_count,
        guild.name,
        guild.members.len()
    );

    ctx.shard
        .chunk_guild(guild.id, None, false, ChunkGuildFilter::None, None);
}

/// Whether `guild` is the configured guild and its member list is incomplete.
pub fn needs_member_chunk(guild: &Guild, scope: GuildId) -> bool {
    guild.id == scope && (guild.members.len() as u64) < guild.member_count
}
