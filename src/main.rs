//! Public client for url-shortener.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL, save its QR code and print share links
//! cargo run --bin shortener -- shorten https://example.com --code mine --qr-out qr.png
//!
//! # Build a share link
//! cargo run --bin shortener -- share twitter https://sho.rt/abc
//!
//! # Show the analytics dashboard (add --json for chart configs)
//! cargo run --bin shortener -- analytics
//! ```
//!
//! # Environment Variables
//!
//! See [`url_shortener_console::config`].

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

use url_shortener_console::config::Config;
use url_shortener_console::prelude::*;
use url_shortener_console::telemetry;
use url_shortener_console::utils::share::{self, SharePlatform};

/// Terminal client for url-shortener.
#[derive(Parser)]
#[command(name = "shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Server root, overrides SHORTENER_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL and show its preview, QR code and share links
    Shorten {
        /// URL to shorten
        url: String,

        /// Custom short code
        #[arg(short, long)]
        code: Option<String>,

        /// Write the QR code PNG to this file
        #[arg(long)]
        qr_out: Option<PathBuf>,
    },

    /// Print a share link for a short URL
    Share {
        /// twitter, facebook, linkedin, email or all
        platform: String,

        /// Short URL to share
        url: String,
    },

    /// Show statistics, charts and recent clicks
    Analytics {
        /// Print chart configurations as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?.with_base_url(cli.base_url);
    config.validate()?;
    telemetry::init(&config);
    config.print_summary();

    match cli.command {
        Commands::Shorten { url, code, qr_out } => {
            let api = Arc::new(
                HttpShortenerApi::from_config(&config).context("Failed to build HTTP client")?,
            );
            handle_shorten(api, &url, code.as_deref(), qr_out).await?
        }
        Commands::Share { platform, url } => handle_share(&platform, &url),
        Commands::Analytics { json } => {
            let api = Arc::new(
                HttpShortenerApi::from_config(&config).context("Failed to build HTTP client")?,
            );
            handle_analytics(api, json).await
        }
    }

    Ok(())
}

/// Runs the landing flow, then lists share links for the new short URL.
async fn handle_shorten(
    api: Arc<HttpShortenerApi>,
    url: &str,
    code: Option<&str>,
    qr_out: Option<PathBuf>,
) -> Result<()> {
    let view = Arc::new(TerminalView::new().with_qr_output(qr_out));
    let controller = LandingController::new(api, view);

    let short = controller
        .shorten(url, code)
        .await
        .context("URL was not shortened")?;

    println!();
    println!("{}", "Share".bright_white().bold());
    for (platform, link) in controller.share_links(&short.short_url) {
        println!("  {:<10} {}", platform.to_string().cyan(), link);
    }
    println!();

    Ok(())
}

fn handle_share(platform: &str, url: &str) {
    if platform.eq_ignore_ascii_case("all") {
        for platform in SharePlatform::ALL {
            println!("{:<10} {}", platform.to_string().cyan(), platform.share_url(url));
        }
        return;
    }

    if platform.parse::<SharePlatform>().is_err() {
        eprintln!(
            "{}",
            format!("⚠️  Unknown platform '{platform}', printing the URL itself").yellow()
        );
    }
    println!("{}", share::share_url(platform, url));
}

async fn handle_analytics(api: Arc<HttpShortenerApi>, json: bool) {
    let view = Arc::new(TerminalView::new().charts_as_json(json));
    let controller = AnalyticsController::new(api, view);
    controller.load().await;
}
