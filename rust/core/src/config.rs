// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Graph construction parameters.

use serde::{Deserialize, Serialize};

/// Default pixel gap under which two rooms still count as touching.
/// Roughly one interior wall's thickness in the RPLAN rasters.
pub const DEFAULT_COLLISION_MARGIN: i64 = 9;

/// Configuration for [`PlanGraphBuilder`](crate::PlanGraphBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Rooms whose boxes are separated by at most this many pixels on both
    /// axes are tested for a spatial relation.
    pub collision_margin: i64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            collision_margin: DEFAULT_COLLISION_MARGIN,
        }
    }
}
