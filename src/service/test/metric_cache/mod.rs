use std::sync::Arc;

use test_utils::fixture::youtube;

use super::FakeMetricProvider;
use crate::model::metric::MetricSnapshot;
use crate::service::metric_cache::MetricCache;
use crate::util::clock::ManualClock;

mod get_snapshot;

const CHANNEL: &str = "UCaiL2GDNpLYH6Wokkk1VNcg";

/// Start of a bucket, so tests can advance up to 99 seconds without leaving it.
const T0: i64 = 1_700_000_000;

fn setup() -> (Arc<FakeMetricProvider>, Arc<ManualClock>, MetricCache) {
    let provider = Arc::new(FakeMetricProvider::new());
    let clock = Arc::new(ManualClock::new(T0));
    let cache = MetricCache::new(provider.clone(), clock.clone(), CHANNEL);
    (provider, clock, cache)
}
