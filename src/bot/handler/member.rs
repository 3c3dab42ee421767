use std::sync::Arc;

use serenity::all::{Context, GuildId, GuildMemberUpdateEvent, Member, RoleId, UserId};
use serenity::prelude::TypeMapKey;

use crate::{
    model::discord::MembershipTransition,
    service::role_sync::{RoleSyncEngine, RoleSyncOutcome},
};

/// Client data key for the role sync engine.
///
/// Only present when role sync is configured.
pub struct RoleSync;

impl TypeMapKey for RoleSync {
    type Value = Arc<RoleSyncEngine>;
}

/// Handles the guild_member_update event by feeding role changes to the role
/// sync engine.
///
/// The previous role set comes from the member cache, which the guild member
/// chunk requested on guild create fills at startup.
pub async fn handle_guild_member_update(
    ctx: Context,
    old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let Some(engine) = ctx.data.read().await.get::<RoleSync>().cloned() else {
        return;
    };

    let cached_roles = old.as_ref().map(|member| member.roles.as_slice());
    let Some(transition) =
        membership_transition(event.guild_id, event.user.id, cached_roles, &event.roles)
    else {
        tracing::debug!(
            "Ignoring update for uncached member {} in guild {}",
            event.user.id,
            event.guild_id
        );
        return;
    };

    match engine.handle_transition(&transition).await {
        Ok(RoleSyncOutcome::Granted) => {}
        Ok(outcome) => {
            tracing::trace!(
                "Member update for user {} handled: {:?}",
                transition.user_id,
                outcome
            );
        }
        Err(e) => {
            tracing::error!(
                "Failed to sync roles for user {} in guild {}: {}",
                transition.user_id,
                transition.guild_id,
                e
            );
        }
    }
}

/// Pairs the cached role set of a member with the roles in an update.
///
/// Returns `None` when the member was not cached: without the previous roles
/// every update would look like an addition.
pub fn membership_transition(
    guild_id: GuildId,
    user_id: UserId,
    cached_roles: Option<&[RoleId]>,
    new_roles: &[RoleId],
) -> Option<MembershipTransition> {
    let before = cached_roles?;

    Some(MembershipTransition::new(
        guild_id,
        user_id,
        before.iter().copied(),
        new_roles.iter().copied(),
    ))
}
