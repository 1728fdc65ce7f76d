use std::time::Duration;

use site_core::query::QueryKey;
use site_live::{Identity, LiveDispatcher, QueryCache, SseTransport};

use crate::cli::commands::WatchArgs;
use crate::context::AppContext;
use crate::sinks::ConsoleAlerts;

/// Handle `siteline watch`.
///
/// Every push-refreshed view is mounted for the lifetime of the command.
/// Runs until interrupted or until the server closes the channel.
pub async fn handle(args: &WatchArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let cache = QueryCache::new(ctx.api.clone());
    for key in QueryKey::PUSH_FANOUT {
        cache.mount(key);
    }

    let transport = SseTransport::from_config(&ctx.config);
    tracing::info!(endpoint = transport.endpoint(), "watching push channel");

    let alerts = ConsoleAlerts {
        quiet: ctx.flags.quiet,
    };
    let live = LiveDispatcher::new(transport, cache, alerts);
    live.on_user_gesture();
    let id = live.connect(Identity::new(args.user_id.clone(), args.role.clone()))?;
    if !ctx.flags.quiet {
        eprintln!("connected ({id}); press Ctrl-C to stop");
    }

    let mut poll = tokio::time::interval(Duration::from_millis(500));
    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result?;
                live.disconnect();
                break;
            }
            _ = poll.tick() => {
                if !live.is_connected() {
                    anyhow::bail!("push channel closed by server");
                }
            }
        }
    }
    Ok(())
}
