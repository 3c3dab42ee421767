//! Grants a derived role when a member gains a trigger role.
//!
//! The engine is stateless between events. It reacts only to transitions that
//! grow a member's role set within the configured guild, and it grants the
//! derived role every time the trigger role appears in the added set. Repeated
//! grants are harmless because Discord role membership is a set.

use std::sync::Arc;

use serenity::all::{GuildId, RoleId};

use crate::{
    data::DiscordGateway,
    error::AppError,
    model::discord::{MembershipTransition, ResolvedGuild, ResolvedRole, RoleGrantRule},
    util::{lazy::LazyResolver, ready::ReadyGate},
};

/// What the engine did with a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSyncOutcome {
    /// The event belongs to another guild.
    OutOfScope,
    /// No role was added (removal or no change).
    NotAdditive,
    /// Roles were added but the trigger role was not among them.
    TriggerNotAdded,
    /// The derived role was granted.
    Granted,
}

pub struct RoleSyncEngine {
    rule: RoleGrantRule,
    gateway: Arc<dyn DiscordGateway>,
    guild: Arc<LazyResolver<GuildId, ResolvedGuild>>,
    trigger_role: LazyResolver<RoleId, ResolvedRole>,
    granted_role: LazyResolver<RoleId, ResolvedRole>,
}

impl RoleSyncEngine {
    pub fn new(
        rule: RoleGrantRule,
        gateway: Arc<dyn DiscordGateway>,
        ready: ReadyGate,
        guild: Arc<LazyResolver<GuildId, ResolvedGuild>>,
    ) -> Self {
        Self {
            trigger_role: LazyResolver::new("trigger role", rule.trigger_role_id, ready.clone()),
            granted_role: LazyResolver::new("granted role", rule.granted_role_id, ready),
            rule,
            gateway,
            guild,
        }
    }

    /// Reacts to one membership update.
    ///
    /// Scope and additivity are checked before anything that can fail or
    /// suspend. Handles are resolved on first use and cached afterwards.
    ///
    /// # Returns
    /// - `Ok(RoleSyncOutcome)` - The event was handled; see the variant for what happened
    /// - `Err(AppError::NotFound)` - The guild or one of the roles could not be resolved
    /// - `Err(AppError::DiscordErr)` - The grant request failed
    pub async fn handle_transition(
        &self,
        transition: &MembershipTransition,
    ) -> Result<RoleSyncOutcome, AppError> {
        if transition.guild_id != self.rule.scope_guild_id {
            tracing::trace!(
                "Ignoring member update from guild {} (not {})",
                transition.guild_id,
                self.rule.scope_guild_id
            );
            return Ok(RoleSyncOutcome::OutOfScope);
        }

        if !transition.is_additive() {
            tracing::trace!(
                "Ignoring non-additive role update for user {}",
                transition.user_id
            );
            return Ok(RoleSyncOutcome::NotAdditive);
        }

        let added = transition.added_roles();

        let guild = self.resolve_guild().await?;
        let trigger = self.resolve_role(&self.trigger_role, &guild).await?;

        if !added.contains(&trigger.role_id) {
            return Ok(RoleSyncOutcome::TriggerNotAdded);
        }

        let granted = self.resolve_role(&self.granted_role, &guild).await?;

        self.gateway
            .add_member_role(&guild, transition.user_id, &granted)
            .await?;

        tracing::info!(
            "User {} received role {}; granted role {} in guild {}",
            transition.user_id,
            trigger.name,
            granted.name,
            guild.name
        );

        Ok(RoleSyncOutcome::Granted)
    }

    async fn resolve_guild(&self) -> Result<ResolvedGuild, AppError> {
        let gateway = &self.gateway;

        self.guild
            .resolve(|id| async move { gateway.find_guild(id).await })
            .await
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", self.guild.id())))
    }

    async fn resolve_role(
        &self,
        resolver: &LazyResolver<RoleId, ResolvedRole>,
        guild: &ResolvedGuild,
    ) -> Result<ResolvedRole, AppError> {
        let gateway = &self.gateway;
        let guild_id = guild.guild_id;

        resolver
            .resolve(|id| async move { gateway.find_role(guild_id, id).await })
            .await
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Role {} not found in guild {}",
                    resolver.id(),
                    guild_id
                ))
            })
    }
}
