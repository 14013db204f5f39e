// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Consumers of a finished [`PlanGraph`](floorplan_graph_core::PlanGraph).
//!
//! - [`report`]: human-readable per-room report
//! - [`json`]: structured export keyed by integer id

pub mod json;
pub mod report;

#[cfg(test)]
pub(crate) mod fixtures;

pub use json::{to_json, PlanSnapshot, PlanSource};
pub use report::{render_report, Report};

/// Errors that can occur while exporting a plan.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
