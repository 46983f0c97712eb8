//! Vetrina Brochure-Site Kernel
//!
//! Loads the declarative site file (route table and navigation menu) and
//! stages the deployable output directory.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vetrina_kernel::build;
use vetrina_kernel::config::Config;
use vetrina_kernel::site::Site;
use vetrina_kernel::theme::ThemeEngine;

#[derive(Parser, Debug)]
#[command(name = "vetrina", version, about = "Brochure-site build kernel")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stage the deployable output directory.
    Build,
    /// Validate the site file and report menu links with no matching route.
    Check,
    /// Print the resolved route table as JSON.
    Routes,
    /// Print the navigation menu tree as JSON.
    Menu,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    let site = Site::from_path(&config.site_file)
        .with_context(|| format!("failed to load site file {}", config.site_file.display()))?;

    match cli.command {
        Command::Build => {
            let engine = ThemeEngine::new(&config.templates_dir)
                .context("failed to load theme templates")?;
            let report = build::run(&config, &site, &engine).context("build failed")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Check => {
            let unrouted = site.menu.unrouted_links(&site.routes);
            if unrouted.is_empty() {
                info!("all menu links resolve to routes");
            } else {
                warn!(count = unrouted.len(), "menu links with no matching route");
            }
            println!(
                "routes: {}, menu entries: {}, unrouted links: {}",
                site.routes.len(),
                site.menu.len(),
                unrouted.len()
            );
        }
        Command::Routes => {
            let entries: Vec<_> = site.routes.entries().collect();
            let output = serde_json::json!({
                "default": site.routes.default_path(),
                "routes": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Menu => {
            println!("{}", serde_json::to_string_pretty(site.menu.entries())?);
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
