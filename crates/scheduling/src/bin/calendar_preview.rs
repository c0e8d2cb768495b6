//! Developer tool: build a month grid and print it as JSON.
//!
//! Stands in for the dashboard's rendering layer when eyeballing grid output:
//!
//! ```text
//! calendar-preview 2025-06 scheduled_posts.json
//! calendar-preview 2025-06              # empty month
//! ```

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scheduling::calendar::grid::{build_month_grid, parse_month_selector};
use scheduling::models::post::posts_from_json;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let month = args
        .next()
        .context("usage: calendar-preview <YYYY-MM> [posts.json]")?;
    let reference = parse_month_selector(&month)?;

    let posts = match args.next() {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read posts file '{path}'"))?;
            posts_from_json(&raw)?
        }
        None => Vec::new(),
    };

    info!("Building grid for {month} with {} posts", posts.len());
    let grid = build_month_grid(reference, &posts);

    println!("{}", serde_json::to_string_pretty(&grid)?);
    Ok(())
}
