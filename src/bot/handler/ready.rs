//! Ready event handler.
//!
//! The gateway sends `ready` once per session. The first one opens the
//! readiness gate that resolvers and the publish jobs wait on; later ones
//! follow a reconnect and only log.

use std::time::Instant;

use serenity::all::{Context, Ready};

use crate::util::ready::ReadyGate;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `gate` - Readiness gate shared with resolvers and scheduled jobs
/// - `started` - Process start time
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(gate: &ReadyGate, started: Instant, _ctx: Context, ready: Ready) {
    if gate.is_ready() {
        tracing::info!("{} reconnected to Discord", ready.user.name);
        return;
    }

    gate.mark_ready();

    tracing::info!("{} is connected to Discord", ready.user.name);
    tracing::info!("Ready after {:.3}s", started.elapsed().as_secs_f64());
}
