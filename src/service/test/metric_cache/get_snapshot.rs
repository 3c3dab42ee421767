use super::*;

/// Tests that reads within one bucket share a single fetch.
///
/// Expected: one provider call, identical snapshots
#[tokio::test]
async fn same_bucket_serves_cached_snapshot() {
    let (provider, clock, cache) = setup();
    provider.push(youtube::channel_response(CHANNEL, 1000, 2000));

    let first = cache.get_snapshot().await;
    clock.advance(99);
    let second = cache.get_snapshot().await;

    assert_eq!(provider.calls(), 1);
    assert_eq!(first, second);
    assert_eq!(
        first,
        Some(MetricSnapshot {
            subscriber_count: 1000,
            view_count: 2000,
            bucket: T0 / 100,
        })
    );
}

/// Tests that a new bucket triggers a refresh.
///
/// Expected: second provider call and the new values replace the old
#[tokio::test]
async fn next_bucket_refreshes() {
    let (provider, clock, cache) = setup();
    provider.push(youtube::channel_response(CHANNEL, 1000, 2000));
    provider.push(youtube::channel_response(CHANNEL, 1001, 2500));

    cache.get_snapshot().await;
    clock.advance(100);
    let snapshot = cache.get_snapshot().await.unwrap();

    assert_eq!(provider.calls(), 2);
    assert_eq!(snapshot.subscriber_count, 1001);
    assert_eq!(snapshot.view_count, 2500);
    assert_eq!(snapshot.bucket, T0 / 100 + 1);
}

/// Tests that an empty `items` list keeps the last good snapshot and does not
/// advance the bucket.
///
/// Expected: previous values returned, and the next read in the same bucket
/// fetches again instead of serving from cache
#[tokio::test]
async fn empty_items_keeps_previous_snapshot() {
    let (provider, clock, cache) = setup();
    provider.push(youtube::channel_response(CHANNEL, 1000, 2000));
    provider.push(youtube::empty_items_response());
    provider.push(youtube::channel_response(CHANNEL, 1100, 2100));

    let good = cache.get_snapshot().await.unwrap();

    clock.advance(100);
    let degraded = cache.get_snapshot().await.unwrap();
    assert_eq!(degraded, good);
    assert_eq!(degraded.bucket, T0 / 100);

    let retried = cache.get_snapshot().await.unwrap();
    assert_eq!(provider.calls(), 3);
    assert_eq!(retried.subscriber_count, 1100);
    assert_eq!(retried.bucket, T0 / 100 + 1);
}

/// Tests that a response for another channel is treated like an empty one.
///
/// Expected: previous snapshot kept, retry on the next read
#[tokio::test]
async fn identity_mismatch_keeps_previous_snapshot() {
    let (provider, clock, cache) = setup();
    provider.push(youtube::channel_response(CHANNEL, 1000, 2000));
    provider.push(youtube::channel_response("UCsomeoneElse", 9_999_999, 9_999_999));

    let good = cache.get_snapshot().await;
    clock.advance(100);

    assert_eq!(cache.get_snapshot().await, good);
    assert_eq!(cache.peek().await, good);

    cache.get_snapshot().await;
    assert_eq!(provider.calls(), 3);
}

/// Tests that a zero count degrades to the previous snapshot rather than
/// replacing it or returning anything else.
///
/// Expected: previous snapshot returned unchanged
#[tokio::test]
async fn zero_count_keeps_previous_snapshot() {
    let (provider, clock, cache) = setup();
    provider.push(youtube::channel_response(CHANNEL, 1000, 2000));
    provider.push(youtube::channel_response(CHANNEL, 0, 0));

    let good = cache.get_snapshot().await;
    clock.advance(100);

    assert_eq!(cache.get_snapshot().await, good);
}

/// Tests that missing `statistics` and error bodies degrade the same way.
///
/// Expected: previous snapshot returned for each degraded response
#[tokio::test]
async fn malformed_responses_keep_previous_snapshot() {
    let (provider, clock, cache) = setup();
    provider.push(youtube::channel_response(CHANNEL, 1000, 2000));
    provider.push(youtube::missing_statistics_response(CHANNEL));
    provider.push(youtube::error_response());
    provider.push(youtube::no_items_response());

    let good = cache.get_snapshot().await;
    clock.advance(100);

    for _ in 0..3 {
        assert_eq!(cache.get_snapshot().await, good);
    }
    assert_eq!(provider.calls(), 4);
}

/// Tests the state before any fetch has succeeded.
///
/// Expected: None, and every read retries
#[tokio::test]
async fn no_snapshot_until_first_success() {
    let (provider, _clock, cache) = setup();
    provider.push(youtube::empty_items_response());

    assert_eq!(cache.get_snapshot().await, None);
    assert_eq!(cache.get_snapshot().await, None);
    assert_eq!(provider.calls(), 2);
}

/// Tests two readers interleaving on a stale bucket.
///
/// Expected: both fetch, the state holds one whole snapshot from one response
#[tokio::test]
async fn interleaved_readers_leave_whole_snapshot() {
    let (provider, _clock, cache) = setup();
    provider.push(youtube::channel_response(CHANNEL, 1000, 2000));
    provider.push(youtube::channel_response(CHANNEL, 1001, 2001));

    let (a, b) = tokio::join!(cache.get_snapshot(), cache.get_snapshot());
    let stored = cache.peek().await.unwrap();

    assert!(a.is_some() && b.is_some());
    assert!(provider.calls() <= 2);
    assert!(
        (stored.subscriber_count, stored.view_count) == (1000, 2000)
            || (stored.subscriber_count, stored.view_count) == (1001, 2001)
    );
}
