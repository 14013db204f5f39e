// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-plan processing: detect, build, write.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use floorplan_graph_core::GraphConfig;
use floorplan_graph_export::{render_report, to_json, PlanSource};
use floorplan_graph_raster::detect_plan;

use crate::config::Config;

/// Expands the input into plan image paths, sorted by name.
pub fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        bail!("input {} does not exist", input.display());
    }

    let mut plans: Vec<PathBuf> = std::fs::read_dir(input)
        .with_context(|| format!("cannot list {}", input.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("png"))
        })
        .collect();
    plans.sort();

    if plans.is_empty() {
        bail!("no PNG plans found in {}", input.display());
    }
    Ok(plans)
}

/// Processes one plan and returns the files written.
pub fn process_plan(path: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let graph_config = GraphConfig {
        collision_margin: config.margin,
    };
    let detected = detect_plan(path, &graph_config)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("plan")
        .to_string();
    let mut written = Vec::new();

    if config.write_report {
        let out = config.output_dir.join(format!("{}.txt", stem));
        std::fs::write(&out, render_report(&detected.graph))
            .with_context(|| format!("cannot write {}", out.display()))?;
        written.push(out);
    }

    if config.write_json {
        let source = PlanSource {
            image_path: path.display().to_string(),
            height: detected.segmented.raster.height(),
            width: detected.segmented.raster.width(),
        };
        let out = config.output_dir.join(format!("{}.json", stem));
        std::fs::write(&out, to_json(&detected.graph, &source)?)
            .with_context(|| format!("cannot write {}", out.display()))?;
        written.push(out);
    }

    Ok(written)
}
