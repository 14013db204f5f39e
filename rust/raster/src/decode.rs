// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel decoding for colour-coded plan images.
//!
//! The RGB channels carry the program colour of each pixel (see
//! [`palette`](crate::palette)); the alpha channel carries the room instance
//! as `255 - alpha`, so fully opaque pixels are background.

use std::path::Path;

use floorplan_graph_core::{LabelGrid, Program};
use image::{Rgba, RgbaImage};

use crate::error::{RasterError, Result};
use crate::palette::{color_for, program_for};

/// Per-pixel label grids of one plan.
#[derive(Debug, Clone)]
pub struct PlanRaster {
    /// Program code of every pixel.
    pub program: LabelGrid,
    /// Room instance of every pixel, 0 for background.
    pub instance: LabelGrid,
}

impl PlanRaster {
    pub fn height(&self) -> usize {
        self.program.height()
    }

    pub fn width(&self) -> usize {
        self.program.width()
    }
}

/// Opens and decodes a plan image.
pub fn load_plan(path: &Path) -> Result<PlanRaster> {
    let img = image::open(path).map_err(|source| RasterError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    decode_rgba(&img.to_rgba8())
}

/// Splits an RGBA plan image into program and instance grids.
pub fn decode_rgba(image: &RgbaImage) -> Result<PlanRaster> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let mut program = LabelGrid::new(height, width, 0);
    let mut instance = LabelGrid::new(height, width, 0);

    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let code = program_for([r, g, b]).ok_or(RasterError::UnknownColor {
            y,
            x,
            rgb: [r, g, b],
        })?;
        program.set(y as usize, x as usize, code.code() as u32);
        instance.set(y as usize, x as usize, 255 - a as u32);
    }

    tracing::debug!(width, height, "decoded plan raster");
    Ok(PlanRaster { program, instance })
}

/// Renders label grids back into the colour-coded format.
///
/// Program codes outside the table are drawn as external area and instance
/// ids above 255 are clamped.
pub fn encode_rgba(raster: &PlanRaster) -> RgbaImage {
    let mut image = RgbaImage::new(raster.width() as u32, raster.height() as u32);
    for ((y, x, code), &id) in raster.program.iter().zip(raster.instance.as_slice()) {
        let [r, g, b] = color_for(Program::from_code(code).unwrap_or(Program::ExternalArea));
        let a = 255 - id.min(255) as u8;
        image.put_pixel(x as u32, y as u32, Rgba([r, g, b, a]));
    }
    image
}
