use std::sync::Arc;

use serenity::all::{GuildId, RoleId, UserId};

use super::FakeGateway;
use crate::error::AppError;
use crate::model::discord::{MembershipTransition, RoleGrantRule};
use crate::service::role_sync::{RoleSyncEngine, RoleSyncOutcome};
use crate::util::{lazy::LazyResolver, ready::ReadyGate};


const GUILD: u64 = 826875707418214451;
const OTHER_GUILD: u64 = 111111111111111111;
const PATRON: u64 = 846834281535504434;
const DONOR: u64 = 843135052036702218;
const MEMBER_ROLE: u64 = 900000000000000001;
const USER: u64 = 500000000000000001;

fn rule() -> RoleGrantRule {
    RoleGrantRule {
        trigger_role_id: RoleId::new(PATRON),
        granted_role_id: RoleId::new(DONOR),
        scope_guild_id: GuildId::new(GUILD),
    }
}

fn gateway() -> FakeGateway {
    FakeGateway::new()
        .with_guild(GUILD, "mCoding")
        .with_role(PATRON, "Patron")
        .with_role(DONOR, "Donor")
        .with_role(MEMBER_ROLE, "Member")
}

fn engine(gateway: Arc<FakeGateway>) -> RoleSyncEngine {
    let ready = ReadyGate::new();
    ready.mark_ready();
    let guild = Arc::new(LazyResolver::new("guild", GuildId::new(GUILD), ready.clone()));
    RoleSyncEngine::new(rule(), gateway, ready, guild)
}

fn transition(guild: u64, before: &[u64], after: &[u64]) -> MembershipTransition {
    MembershipTransition::new(
        GuildId::new(guild),
        UserId::new(USER),
        before.iter().map(|id| RoleId::new(*id)),
        after.iter().map(|id| RoleId::new(*id)),
    )
}
