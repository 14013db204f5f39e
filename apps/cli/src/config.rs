// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration: environment defaults overridden by flags.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// What to process and where to write it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// A plan image or a directory of plan images.
    pub input: PathBuf,
    /// Directory receiving `<stem>.txt` / `<stem>.json`.
    pub output_dir: PathBuf,
    /// Room collision margin in pixels.
    pub margin: i64,
    /// Number of plans processed in parallel.
    pub workers: usize,
    pub write_report: bool,
    pub write_json: bool,
}

impl Config {
    /// Load defaults from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            input: PathBuf::new(),
            output_dir: lookup("FLOORPLAN_OUTPUT_DIR")
                .unwrap_or_else(|| "output".into())
                .into(),
            margin: lookup("FLOORPLAN_MARGIN")
                .and_then(|v| v.parse().ok())
                .unwrap_or(floorplan_graph_core::config::DEFAULT_COLLISION_MARGIN),
            workers: lookup("FLOORPLAN_WORKERS")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(num_cpus::get),
            write_report: true,
            write_json: false,
        }
    }

    /// Applies command-line arguments (without the program name).
    ///
    /// Returns `Ok(None)` when help was requested.
    pub fn with_args(mut self, args: &[String]) -> Result<Option<Self>> {
        if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
            return Ok(None);
        }
        self.input = PathBuf::from(&args[0]);

        let mut explicit_format = false;
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output-dir" => {
                    i += 1;
                    let value = args.get(i).context("--output-dir needs a value")?;
                    self.output_dir = PathBuf::from(value);
                }
                "--margin" => {
                    i += 1;
                    let value = args.get(i).context("--margin needs a value")?;
                    self.margin = value
                        .parse()
                        .with_context(|| format!("invalid margin value '{}'", value))?;
                }
                "--workers" => {
                    i += 1;
                    let value = args.get(i).context("--workers needs a value")?;
                    self.workers = value
                        .parse()
                        .with_context(|| format!("invalid workers value '{}'", value))?;
                }
                "--json" | "--report" => {
                    if !explicit_format {
                        self.write_report = false;
                        self.write_json = false;
                        explicit_format = true;
                    }
                    if args[i] == "--json" {
                        self.write_json = true;
                    } else {
                        self.write_report = true;
                    }
                }
                other => bail!("unknown option: {}", other),
            }
            i += 1;
        }

        if self.workers == 0 {
            bail!("--workers must be at least 1");
        }
        Ok(Some(self))
    }
}
