use anyhow::Result;

use crate::app::{App, SyncOutcome};
use crate::config::Config;
use crate::view::ConsoleView;

/// Foreground reconciliation loop: one sync at startup, then one per
/// interval tick. Runs are serialized by construction — the next tick is
/// not polled until the previous cycle finishes.
pub async fn start(cfg: &Config) -> Result<()> {
    let pid_path = Config::pid_path()?;
    std::fs::write(&pid_path, std::process::id().to_string())?;

    let conn = crate::store::open()?;
    let mut app = App::open(conn, ConsoleView)?;
    app.restore_last_shown();

    tracing::info!(
        "Watching {} (resync every {}s)",
        cfg.server_url,
        cfg.sync_interval_secs
    );

    log_outcome(app.sync_now(cfg).await);

    if cfg.auto_sync {
        let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(
            cfg.sync_interval_secs.max(1),
        ));
        // Skip the first immediate tick; startup already synced
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    log_outcome(app.sync_now(cfg).await);
                }
                _ = tokio::signal::ctrl_c() => break,
            }
        }
    } else {
        tracing::info!("auto_sync disabled — waiting for Ctrl+C");
        tokio::signal::ctrl_c().await?;
    }

    tracing::info!("Shutting down...");
    let _ = std::fs::remove_file(&pid_path);
    Ok(())
}

pub async fn stop() -> Result<()> {
    let pid_path = Config::pid_path()?;
    if !pid_path.exists() {
        println!("quotedeck watch is not running.");
        return Ok(());
    }

    let pid: u32 = std::fs::read_to_string(&pid_path)?.trim().parse()?;

    #[cfg(unix)]
    {
        std::process::Command::new("kill").arg(pid.to_string()).output()?;
        let _ = std::fs::remove_file(&pid_path);
        println!("✓ Stopped quotedeck watch (pid {pid}).");
    }

    #[cfg(not(unix))]
    println!("Stopping the watch loop is not supported on this platform (pid {pid}).");

    Ok(())
}

/// Pid of a live watch loop, if one is running.
pub fn running_pid() -> Option<String> {
    let pid_path = Config::pid_path().ok()?;
    let pid = std::fs::read_to_string(pid_path).ok()?;
    let pid = pid.trim().to_string();
    std::fs::metadata(format!("/proc/{pid}")).ok()?;
    Some(pid)
}

fn log_outcome(outcome: SyncOutcome) {
    match outcome {
        SyncOutcome::Synced(count) => tracing::info!("Reconciled {count} quotes from server"),
        SyncOutcome::Failed(reason) => tracing::warn!("Sync failed: {reason}"),
    }
}
