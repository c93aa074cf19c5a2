// bases/download_cli/src/main.rs
mod app;
mod args;
mod config;
mod output;

use app::App;
use args::Args;
use clap::Parser;
use color_eyre::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let config = Config::from_args(args)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with_target(false)
        .init();

    let app = App::new(config);

    if let Err(error) = app.run().await {
        app.print_error(&error);
        std::process::exit(1);
    }
    Ok(())
}
