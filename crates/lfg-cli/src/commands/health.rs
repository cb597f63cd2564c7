use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use lfg_core::{HealthSettings, parse_duration};
use lfg_health::ConnectionMonitor;

fn resolve_url(settings: &HealthSettings, url: Option<&str>) -> anyhow::Result<String> {
    url.map(str::to_string)
        .or_else(|| settings.url.clone())
        .context("no health url: pass --url or set [health].url in lfg.toml")
}

fn report(monitor: &ConnectionMonitor, ok: bool) -> bool {
    println!("{} {}", monitor.url(), monitor.state());
    ok
}

pub async fn check(settings: &HealthSettings, url: Option<&str>) -> anyhow::Result<bool> {
    let monitor = ConnectionMonitor::from_settings(resolve_url(settings, url)?, settings);
    let ok = monitor.check_once().await;
    Ok(report(&monitor, ok))
}

pub async fn wait(
    settings: &HealthSettings,
    url: Option<&str>,
    max_wait: &str,
) -> anyhow::Result<bool> {
    let max_wait = parse_duration(max_wait)
        .with_context(|| format!("invalid --max-wait {max_wait:?}"))?;
    let monitor = ConnectionMonitor::from_settings(resolve_url(settings, url)?, settings);

    info!(url = %monitor.url(), ?max_wait, "waiting for backend");
    let ok = monitor.wait_for_connection(max_wait).await;
    Ok(report(&monitor, ok))
}

pub async fn reconnect(settings: &HealthSettings, url: Option<&str>) -> anyhow::Result<bool> {
    let monitor = Arc::new(ConnectionMonitor::from_settings(
        resolve_url(settings, url)?,
        settings,
    ));

    // Ctrl-C abandons the backoff run instead of killing the process mid-probe.
    let interrupt = {
        let monitor = monitor.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupted, abandoning reconnect");
                monitor.reset();
            }
        })
    };

    let policy = monitor.policy();
    info!(
        url = %monitor.url(),
        base_delay = ?policy.base_delay(),
        max_delay = ?policy.max_delay(),
        max_attempts = policy.max_attempts(),
        "starting reconnect"
    );
    let ok = monitor.reconnect_with_backoff().await;
    interrupt.abort();

    Ok(report(&monitor, ok))
}
