mod core {
    pub mod config;
    pub mod error;
    pub mod tracing_init;
}

mod api;
mod directory;
mod models;
mod ui;

use anyhow::{Context, Result};
use api::client::DirectoryClient;
use core::config::Config;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use ui::render;
use ui::routes::{parse_route, Route};
use ui::state::ListScreen;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    // Load and validate configuration
    let config = Config::from_file(&config_path).context(format!(
        "Failed to load configuration from '{}'. \
        If this is your first time running the viewer, copy config.example.toml to config.toml and adjust the values.",
        config_path.display()
    ))?;

    // Initialize tracing/logging
    core::tracing_init::init_tracing(&config.logging);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(config))
}

async fn async_main(config: Config) -> Result<()> {
    info!(
        base_url = %config.api.base_url,
        timeout_secs = config.api.timeout_secs,
        "Door directory viewer starting"
    );

    let client = DirectoryClient::new(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )
    .context("Failed to create directory client")?;

    // Initial list activation
    let mut screen = activate_list(&client).await;
    print_usage();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        match parse_route(input) {
            Some(Route::List) => {
                // Re-entering the list is a fresh activation with a fresh fetch
                screen = activate_list(&client).await;
            }
            Some(Route::Detail { id }) => {
                // Detail derives synchronously from the loaded batch
                println!("{}", render::render_detail(screen.records(), id));
            }
            None => print_usage(),
        }
    }

    info!("Shutting down");

    Ok(())
}

/// One list-screen activation: enter loading, run the single armed fetch,
/// apply the completion and render the settled state.
async fn activate_list(client: &DirectoryClient) -> ListScreen {
    let mut screen = ListScreen::activate();
    println!("{}", render::render_list(screen.state()));

    if screen.take_fetch_trigger() {
        let outcome = client.fetch_directory().await;
        screen.complete_fetch(outcome);
    }

    println!("{}", render::render_list(screen.state()));
    screen
}

fn print_usage() {
    println!("Commands: list | detail/<id> | quit");
}
