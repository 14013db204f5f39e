// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned pixel bounding boxes.

use serde::{Deserialize, Serialize};

/// A point in plan space, in pixels. Rows first, like the boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub y: f64,
    pub x: f64,
}

impl Point {
    pub fn new(y: f64, x: f64) -> Self {
        Self { y, x }
    }
}

/// Axis-aligned bounding box in pixel units.
///
/// `y0..y1` spans rows and `x0..x1` spans columns. Boxes produced by region
/// extraction are half-open: `y1` and `x1` are one past the last pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub y0: i64,
    pub y1: i64,
    pub x0: i64,
    pub x1: i64,
}

impl BoundingBox {
    pub fn new(y0: i64, y1: i64, x0: i64, x1: i64) -> Self {
        Self { y0, y1, x0, x1 }
    }

    /// Extent along the row axis.
    pub fn length(&self) -> i64 {
        self.y1 - self.y0
    }

    /// Extent along the column axis.
    pub fn width(&self) -> i64 {
        self.x1 - self.x0
    }

    pub fn area(&self) -> i64 {
        self.length() * self.width()
    }

    pub fn centroid(&self) -> Point {
        Point::new(
            (self.y0 + self.y1) as f64 / 2.0,
            (self.x0 + self.x1) as f64 / 2.0,
        )
    }

    /// `true` if `other` lies strictly inside this box on all four sides.
    pub fn contains_strictly(&self, other: &BoundingBox) -> bool {
        self.x0 < other.x0 && self.x1 > other.x1 && self.y0 < other.y0 && self.y1 > other.y1
    }

    /// `true` if this box lies inside `other`, touching sides allowed.
    pub fn is_within(&self, other: &BoundingBox) -> bool {
        self.x0 >= other.x0 && self.x1 <= other.x1 && self.y0 >= other.y0 && self.y1 <= other.y1
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.y0, self.y1, self.x0, self.x1)
    }
}
