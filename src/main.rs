use clap::Parser;

use quotedeck::cli::{self, Cli, Command};
use quotedeck::{config, watch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotedeck=info".into()),
        )
        .init();

    let cfg = config::Config::load()?;

    match cli.command {
        Command::Show { category } => cli::show::run(category.as_deref()),
        Command::Add { text, category } => cli::add::run(&cfg, &text, &category).await,
        Command::List => cli::list::run(),
        Command::Categories => cli::categories::run(),
        Command::Filter { category } => cli::filter::run(&category),
        Command::Export { output } => cli::export::run(output.as_deref()),
        Command::Import { file } => cli::import::run(&file),
        Command::Sync => cli::sync::run(&cfg).await,
        Command::Watch => watch::start(&cfg).await,
        Command::Stop => watch::stop().await,
        Command::Status => cli::status::run(&cfg),
    }
}
