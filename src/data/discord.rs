use std::sync::Arc;

use serenity::{
    all::{Cache, ChannelId, EditChannel, GuildId, RoleId, UserId},
    async_trait,
    http::Http,
};

use crate::{
    error::AppError,
    model::discord::{ResolvedChannel, ResolvedGuild, ResolvedRole},
};

/// Audit log reason attached to automatic role grants.
const ROLE_GRANT_REASON: &str = "Automatic role grant";

/// The Discord operations the bot needs: three lookups and two mutations.
///
/// Lookups return `None` both when the entity does not exist and when the
/// lookup itself fails; callers treat either as an absent handle.
#[async_trait]
pub trait DiscordGateway: Send + Sync {
    async fn find_guild(&self, guild_id: GuildId) -> Option<ResolvedGuild>;

    async fn find_role(&self, guild_id: GuildId, role_id: RoleId) -> Option<ResolvedRole>;

    async fn find_channel(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Option<ResolvedChannel>;

    /// Sets the display name of a channel.
    async fn rename_channel(&self, channel: &ResolvedChannel, name: &str) -> Result<(), AppError>;

    /// Adds a role to a member. Adding a role the member already holds is a
    /// no-op on Discord's side.
    async fn add_member_role(
        &self,
        guild: &ResolvedGuild,
        user_id: UserId,
        role: &ResolvedRole,
    ) -> Result<(), AppError>;
}

/// `DiscordGateway` backed by the Serenity cache and HTTP client.
///
/// Lookups try the cache first and fall back to a single HTTP request.
pub struct SerenityGateway {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl SerenityGateway {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }
}

#[async_trait]
impl DiscordGateway for SerenityGateway {
    async fn find_guild(&self, guild_id: GuildId) -> Option<ResolvedGuild> {
        if let Some(guild) = self.cache.guild(guild_id) {
            return Some(ResolvedGuild::from(&*guild));
        }

        match self.http.get_guild(guild_id).await {
            Ok(guild) => Some(ResolvedGuild::from(&guild)),
            Err(e) => {
                tracing::warn!("Failed to fetch guild {} from Discord API: {}", guild_id, e);
                None
            }
        }
    }

    async fn find_role(&self, guild_id: GuildId, role_id: RoleId) -> Option<ResolvedRole> {
        let cached = self
            .cache
            .guild(guild_id)
            .and_then(|guild| guild.roles.get(&role_id).map(ResolvedRole::from));
        if cached.is_some() {
            return cached;
        }

        match self.http.get_guild_roles(guild_id).await {
            Ok(roles) => roles
                .iter()
                .find(|role| role.id == role_id)
                .map(ResolvedRole::from),
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch roles of guild {} from Discord API: {}",
                    guild_id,
                    e
                );
                None
            }
        }
    }

    async fn find_channel(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Option<ResolvedChannel> {
        let cached = self
            .cache
            .guild(guild_id)
            .and_then(|guild| guild.channels.get(&channel_id).map(ResolvedChannel::from));
        if cached.is_some() {
            return cached;
        }

        match self.http.get_channel(channel_id).await {
            Ok(channel) => match channel.guild() {
                Some(channel) if channel.guild_id == guild_id => {
                    Some(ResolvedChannel::from(&channel))
                }
                _ => {
                    tracing::warn!(
                        "Channel {} is not a channel of guild {}",
                        channel_id,
                        guild_id
                    );
                    None
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch channel {} from Discord API: {}",
                    channel_id,
                    e
                );
                None
            }
        }
    }

    async fn rename_channel(&self, channel: &ResolvedChannel, name: &str) -> Result<(), AppError> {
        channel
            .channel_id
            .edit(self.http.as_ref(), EditChannel::new().name(name))
            .await?;

        Ok(())
    }

    async fn add_member_role(
        &self,
        guild: &ResolvedGuild,
        user_id: UserId,
        role: &ResolvedRole,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                guild.guild_id,
                user_id,
                role.role_id,
                Some(ROLE_GRANT_REASON),
            )
            .await?;

        Ok(())
    }
}
