use std::sync::Arc;
use std::time::Duration;

use serenity::all::{ChannelId, GuildId};
use test_utils::fixture::youtube;

use super::{FakeGateway, FakeMetricProvider};
use crate::error::{format::FormatError, AppError};
use crate::model::metric::StatDimension;
use crate::service::channel_status::{ChannelStatusService, PublishOutcome};
use crate::service::metric_cache::MetricCache;
use crate::util::{clock::ManualClock, lazy::LazyResolver, ready::ReadyGate};


const GUILD: u64 = 826875707418214451;
const SUB_CHANNEL: u64 = 700000000000000001;
const VIEW_CHANNEL: u64 = 700000000000000002;
const YT_CHANNEL: &str = "UCaiL2GDNpLYH6Wokkk1VNcg";

struct Setup {
    provider: Arc<FakeMetricProvider>,
    clock: Arc<ManualClock>,
    gateway: Arc<FakeGateway>,
    ready: ReadyGate,
    subs: ChannelStatusService,
    views: ChannelStatusService,
}

fn setup(gateway: FakeGateway) -> Setup {
    let provider = Arc::new(FakeMetricProvider::new());
    let clock = Arc::new(ManualClock::new(1_700_000_000));
    let gateway = Arc::new(gateway);
    let ready = ReadyGate::new();

    let cache = Arc::new(MetricCache::new(provider.clone(), clock.clone(), YT_CHANNEL));
    let guild = Arc::new(LazyResolver::new("guild", GuildId::new(GUILD), ready.clone()));

    let service = |dimension, channel_id| {
        ChannelStatusService::new(
            dimension,
            ChannelId::new(channel_id),
            cache.clone(),
            gateway.clone(),
            ready.clone(),
            guild.clone(),
        )
    };

    Setup {
        subs: service(StatDimension::Subscribers, SUB_CHANNEL),
        views: service(StatDimension::Views, VIEW_CHANNEL),
        provider,
        clock,
        gateway,
        ready,
    }
}

fn full_gateway() -> FakeGateway {
    FakeGateway::new()
        .with_guild(GUILD, "mCoding")
        .with_channel(SUB_CHANNEL, "Subs: ?")
        .with_channel(VIEW_CHANNEL, "Views: ?")
}
