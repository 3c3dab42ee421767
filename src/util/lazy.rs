//! Write-once resolution of Discord ids into live handles.
//!
//! Guilds, roles and channels are configured by id but most operations need
//! the entity itself. A `LazyResolver` turns one id into a handle the first
//! time it is needed, after the gateway is ready, and keeps that result for
//! the rest of the process.
//!
//! The cached result is never refreshed. If the lookup comes back empty the
//! absence is cached too, so a role deleted and recreated under a new id (or
//! a lookup that lost a race with startup) needs a restart to be picked up.

use std::fmt::Display;
use std::future::Future;

use tokio::sync::OnceCell;

use crate::util::ready::ReadyGate;

pub struct LazyResolver<I, T> {
    id: I,
    /// What is being resolved, for log messages ("guild", "donor role", ...).
    kind: &'static str,
    ready: ReadyGate,
    handle: OnceCell<Option<T>>,
}

impl<I, T> LazyResolver<I, T>
where
    I: Copy + Display,
    T: Clone,
{
    pub fn new(kind: &'static str, id: I, ready: ReadyGate) -> Self {
        Self {
            id,
            kind,
            ready,
            handle: OnceCell::new(),
        }
    }

    pub fn id(&self) -> I {
        self.id
    }

    /// Returns the cached handle without suspending.
    ///
    /// `None` means resolution has not happened yet; `Some(None)` means it
    /// happened and the entity was not found.
    pub fn cached(&self) -> Option<Option<T>> {
        self.handle.get().cloned()
    }

    /// Resolves the handle, running `lookup` at most once per resolver.
    ///
    /// The first caller waits for the gateway to become ready and then performs
    /// the lookup. Concurrent first callers share that single lookup. Every
    /// later call returns the cached result without suspending.
    pub async fn resolve<F, Fut>(&self, lookup: F) -> Option<T>
    where
        F: FnOnce(I) -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        if let Some(handle) = self.cached() {
            return handle;
        }

        self.ready.wait().await;

        self.handle
            .get_or_init(|| async move {
                let handle = lookup(self.id).await;
                match handle {
                    Some(_) => tracing::debug!("Resolved {} {}", self.kind, self.id),
                    None => tracing::warn!(
                        "Could not resolve {} {}; dependent work will be skipped",
                        self.kind,
                        self.id
                    ),
                }
                handle
            })
            .await
            .clone()
    }
}
