//! town-routes - run the route analyses over the town graph.
//!
//! ```bash
//! # defaults: Madrid -> Getafe, 15 km threshold, with timing
//! town-routes
//!
//! # another pair of towns, no measured pass
//! town-routes --from "Torrejón de Ardoz" --to "Boadilla del Monte" --no-timing
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use stats_alloc::{StatsAlloc, INSTRUMENTED_SYSTEM};
use std::alloc::System;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use town_routes::config::AnalysisConfig;
use town_routes::graph::towns;
use town_routes::report::{run_reports, run_timed_reports};

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

/// Route analyses over the Madrid region town graph
#[derive(Parser)]
#[command(name = "town-routes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start town
    #[arg(long, default_value = "Madrid")]
    from: String,

    /// Goal town
    #[arg(long, default_value = "Getafe")]
    to: String,

    /// Distance in km every road of a town must stay under
    #[arg(short, long, default_value_t = 15)]
    threshold: u32,

    /// Skip the measured second pass
    #[arg(long)]
    no_timing: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for AnalysisConfig {
    fn from(cli: Cli) -> Self {
        Self {
            from: cli.from,
            to: cli.to,
            threshold: cli.threshold,
            timing: !cli.no_timing,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "town_routes=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = AnalysisConfig::from(cli);
    let graph = towns();
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "town graph built");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_reports(&mut out, &graph, &config)
        .with_context(|| format!("analysing routes from {} to {}", config.from, config.to))?;

    if config.timing {
        writeln!(out)?;
        run_timed_reports(&mut out, &graph, &config).context("measuring analyses")?;
    }

    out.flush()?;
    Ok(())
}
