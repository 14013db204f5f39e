// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for raster decoding and segmentation.

use std::path::PathBuf;

/// Result type alias for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;

/// Errors that can occur while turning a plan image into graph inputs.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// The image could not be opened or decoded.
    #[error("cannot read plan image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A pixel colour is not in the program colour table.
    #[error("pixel ({y}, {x}) has colour {rgb:?}, which is not a known program")]
    UnknownColor { y: u32, x: u32, rgb: [u8; 3] },

    /// No pixel carries the front door program.
    #[error("plan has no front door pixels")]
    NoFrontDoor,

    /// Graph construction rejected the plan.
    #[error(transparent)]
    Graph(#[from] floorplan_graph_core::Error),
}
