use anyhow::Result;

use crate::app::App;
use crate::config::Config;
use crate::view::ConsoleView;

pub fn run(cfg: &Config) -> Result<()> {
    let conn = crate::store::open()?;
    let app = App::open(conn, ConsoleView)?;

    println!("quotedeck v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let watch_status = match crate::watch::running_pid() {
        Some(pid) => format!("running (pid {pid})"),
        None => "stopped".to_string(),
    };
    println!("Watch loop:      {watch_status}");
    println!();

    println!("Quotes:          {}", app.repo().len());
    println!("Categories:      {}", app.repo().categories().len() - 1);
    println!("Active filter:   {}", app.active_filter());
    println!();
    println!("Server:          {}", cfg.server_url);
    println!("Sync interval:   {}s", cfg.sync_interval_secs);
    println!("Auto-sync:       {}", if cfg.auto_sync { "enabled" } else { "disabled" });
    println!("Data dir:        {}", Config::data_dir()?.display());

    Ok(())
}
