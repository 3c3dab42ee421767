use std::collections::HashSet;

use serenity::all::{ChannelId, Guild, GuildChannel, GuildId, PartialGuild, Role, RoleId, UserId};

/// A guild that was found when its handle was first resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGuild {
    pub guild_id: GuildId,
    pub name: String,
}

impl From<&Guild> for ResolvedGuild {
    fn from(guild: &Guild) -> Self {
        Self {
            guild_id: guild.id,
            name: guild.name.clone(),
        }
    }
}

impl From<&PartialGuild> for ResolvedGuild {
    fn from(guild: &PartialGuild) -> Self {
        Self {
            guild_id: guild.id,
            name: guild.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRole {
    pub role_id: RoleId,
    pub name: String,
}

impl From<&Role> for ResolvedRole {
    fn from(role: &Role) -> Self {
        Self {
            role_id: role.id,
            name: role.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChannel {
    pub channel_id: ChannelId,
    pub name: String,
}

impl From<&GuildChannel> for ResolvedChannel {
    fn from(channel: &GuildChannel) -> Self {
        Self {
            channel_id: channel.id,
            name: channel.name.clone(),
        }
    }
}

/// Grants `granted_role_id` whenever a member of `scope_guild_id` gains
/// `trigger_role_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGrantRule {
    pub trigger_role_id: RoleId,
    pub granted_role_id: RoleId,
    pub scope_guild_id: GuildId,
}

/// The role sets of a member immediately before and after an update event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipTransition {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub before: Vec<RoleId>,
    pub after: Vec<RoleId>,
}

impl MembershipTransition {
    pub fn new(
        guild_id: GuildId,
        user_id: UserId,
        before: impl IntoIterator<Item = RoleId>,
        after: impl IntoIterator<Item = RoleId>,
    ) -> Self {
        Self {
            guild_id,
            user_id,
            before: before.into_iter().collect(),
            after: after.into_iter().collect(),
        }
    }

    /// Whether the update can have added a role.
    ///
    /// Compares set sizes rather than contents: a swap of one role for another
    /// keeps the size and is ignored, even if the new role is the trigger.
    pub fn is_additive(&self) -> bool {
        self.after.len() > self.before.len()
    }

    /// Roles present after the update but not before, in `after` order.
    pub fn added_roles(&self) -> Vec<RoleId> {
        let before: HashSet<RoleId> = self.before.iter().copied().collect();
        self.after
            .iter()
            .copied()
            .filter(|role| !before.contains(role))
            .collect()
    }
}
