// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: extract room/door graphs from colour-coded floor plan images.
//!
//! Usage:
//!   floorplan-graph <image_or_directory> [options]
//!
//! A directory is processed plan by plan on a worker pool. Plans are
//! independent, so one bad plan never affects another.

mod config;
mod pipeline;

use anyhow::{Context, Result};
use rayon::prelude::*;

use config::Config;

fn print_usage() {
    eprintln!("Usage: floorplan-graph <image_or_directory> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --output-dir <dir>   Output directory (default: output, env FLOORPLAN_OUTPUT_DIR)");
    eprintln!("  --margin <px>        Room collision margin (default: 9, env FLOORPLAN_MARGIN)");
    eprintln!("  --workers <n>        Plans processed in parallel (env FLOORPLAN_WORKERS)");
    eprintln!("  --report             Write the text report (default)");
    eprintln!("  --json               Write the JSON export");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,floorplan_graph_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(0) => {}
        Ok(failed) => {
            tracing::error!(failed, "some plans could not be processed");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            std::process::exit(2);
        }
    }
}

/// Returns the number of plans that failed.
fn run() -> Result<usize> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = Config::from_env().with_args(&args)? else {
        print_usage();
        return Ok(0);
    };

    let plans = pipeline::collect_inputs(&config.input)?;
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("cannot create output directory {}", config.output_dir.display())
    })?;

    tracing::info!(
        plans = plans.len(),
        output_dir = %config.output_dir.display(),
        margin = config.margin,
        workers = config.workers,
        "Starting floor plan graph extraction"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()
        .context("cannot build worker pool")?;

    let failed = pool.install(|| {
        plans
            .par_iter()
            .filter(|path| match pipeline::process_plan(path, &config) {
                Ok(written) => {
                    for out in written {
                        tracing::info!(path = %out.display(), "wrote output");
                    }
                    false
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "plan rejected: {:#}", e);
                    true
                }
            })
            .count()
    });

    Ok(failed)
}
