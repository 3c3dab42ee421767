//! Service tests against in-memory fakes of the external systems.

use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde_json::Value;
use serenity::all::{ChannelId, GuildId, RoleId, UserId};
use serenity::async_trait;

use crate::data::{DiscordGateway, MetricProvider};
use crate::error::{metric::MetricError, AppError};
use crate::model::discord::{ResolvedChannel, ResolvedGuild, ResolvedRole};

mod channel_status;
mod metric_cache;
mod role_sync;

/// Provider that replays queued responses and counts requests.
///
/// Once the queue is drained every further fetch returns an empty object.
#[derive(Default)]
pub struct FakeMetricProvider {
    responses: Mutex<VecDeque<Value>>,
    calls: AtomicUsize,
}

impl FakeMetricProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, body: Value) {
        self.responses.lock().unwrap().push_back(body);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetricProvider for FakeMetricProvider {
    async fn fetch_statistics(&self, _channel_id: &str) -> Result<Value, MetricError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| Value::Object(Default::default())))
    }
}

/// In-memory Discord with set semantics for member roles.
#[derive(Default)]
pub struct FakeGateway {
    guilds: Mutex<HashMap<GuildId, String>>,
    roles: Mutex<HashMap<RoleId, String>>,
    channels: Mutex<HashMap<ChannelId, String>>,
    member_roles: Mutex<HashMap<UserId, BTreeSet<RoleId>>>,
    lookups: AtomicUsize,
    grants: AtomicUsize,
    renames: Mutex<Vec<(ChannelId, String)>>,
    fail_renames: Mutex<bool>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guild(self, guild_id: u64, name: &str) -> Self {
        self.guilds
            .lock()
            .unwrap()
            .insert(GuildId::new(guild_id), name.to_string());
        self
    }

    pub fn with_role(self, role_id: u64, name: &str) -> Self {
        self.roles
            .lock()
            .unwrap()
            .insert(RoleId::new(role_id), name.to_string());
        self
    }

    pub fn with_channel(self, channel_id: u64, name: &str) -> Self {
        self.channels
            .lock()
            .unwrap()
            .insert(ChannelId::new(channel_id), name.to_string());
        self
    }

    pub fn with_member(self, user_id: u64, roles: &[u64]) -> Self {
        self.member_roles.lock().unwrap().insert(
            UserId::new(user_id),
            roles.iter().map(|id| RoleId::new(*id)).collect(),
        );
        self
    }

    pub fn fail_renames(&self) {
        *self.fail_renames.lock().unwrap() = true;
    }

    pub fn member_roles(&self, user_id: u64) -> BTreeSet<RoleId> {
        self.member_roles
            .lock()
            .unwrap()
            .get(&UserId::new(user_id))
            .cloned()
            .unwrap_or_default()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn grants(&self) -> usize {
        self.grants.load(Ordering::SeqCst)
    }

    pub fn renames(&self) -> Vec<(ChannelId, String)> {
        self.renames.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiscordGateway for FakeGateway {
    async fn find_guild(&self, guild_id: GuildId) -> Option<ResolvedGuild> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.guilds
            .lock()
            .unwrap()
            .get(&guild_id)
            .map(|name| ResolvedGuild {
                guild_id,
                name: name.clone(),
            })
    }

    async fn find_role(&self, _guild_id: GuildId, role_id: RoleId) -> Option<ResolvedRole> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.roles
            .lock()
            .unwrap()
            .get(&role_id)
            .map(|name| ResolvedRole {
                role_id,
                name: name.clone(),
            })
    }

    async fn find_channel(
        &self,
        _guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Option<ResolvedChannel> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.channels
            .lock()
            .unwrap()
            .get(&channel_id)
            .map(|name| ResolvedChannel {
                channel_id,
                name: name.clone(),
            })
    }

    async fn rename_channel(&self, channel: &ResolvedChannel, name: &str) -> Result<(), AppError> {
        if *self.fail_renames.lock().unwrap() {
            return Err(AppError::NotFound(format!(
                "Unknown channel {}",
                channel.channel_id
            )));
        }
        self.channels
            .lock()
            .unwrap()
            .insert(channel.channel_id, name.to_string());
        self.renames
            .lock()
            .unwrap()
            .push((channel.channel_id, name.to_string()));
        Ok(())
    }

    async fn add_member_role(
        &self,
        _guild: &ResolvedGuild,
        user_id: UserId,
        role: &ResolvedRole,
    ) -> Result<(), AppError> {
        self.grants.fetch_add(1, Ordering::SeqCst);
        self.member_roles
            .lock()
            .unwrap()
            .entry(user_id)
            .or_default()
            .insert(role.role_id);
        Ok(())
    }
}
