// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Row-major 2D label arrays.

use crate::error::{Error, Result};

/// A 2D grid of integer labels, stored row-major.
///
/// Used for both room-instance labels (0 = background) and program codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    height: usize,
    width: usize,
    data: Vec<u32>,
}

impl LabelGrid {
    /// Creates a grid filled with `fill`.
    pub fn new(height: usize, width: usize, fill: u32) -> Self {
        Self {
            height,
            width,
            data: vec![fill; height * width],
        }
    }

    /// Wraps existing row-major data, checking it matches the shape.
    pub fn from_vec(height: usize, width: usize, data: Vec<u32>) -> Result<Self> {
        let expected = height * width;
        if data.len() != expected {
            return Err(Error::GridShape {
                height,
                width,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Builds a grid from equally long rows.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let data: Vec<u32> = rows.iter().flatten().copied().collect();
        if rows.iter().any(|r| r.len() != width) {
            return Err(Error::GridShape {
                height,
                width,
                expected: height * width,
                actual: data.len(),
            });
        }
        Self::from_vec(height, width, data)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the label at `(y, x)`, or `None` outside the grid.
    pub fn get(&self, y: i64, x: i64) -> Option<u32> {
        let y = usize::try_from(y).ok()?;
        let x = usize::try_from(x).ok()?;
        if y >= self.height || x >= self.width {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    /// Sets the label at `(y, x)`. Out-of-range writes are ignored.
    pub fn set(&mut self, y: usize, x: usize, value: u32) {
        if y < self.height && x < self.width {
            self.data[y * self.width + x] = value;
        }
    }

    /// Fills the half-open rectangle `[y0, y1) x [x0, x1)`, clipped to the grid.
    pub fn fill_rect(&mut self, y0: usize, y1: usize, x0: usize, x1: usize, value: u32) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.data[y * self.width + x] = value;
            }
        }
    }

    /// Iterates `(y, x, label)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        let width = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / width, i % width, v))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reads_are_none() {
        let g = LabelGrid::new(3, 4, 7);
        assert_eq!(g.get(0, 0), Some(7));
        assert_eq!(g.get(2, 3), Some(7));
        assert_eq!(g.get(-1, 0), None);
        assert_eq!(g.get(0, 4), None);
        assert_eq!(g.get(3, 0), None);
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        assert!(matches!(
            LabelGrid::from_vec(2, 2, vec![0; 3]),
            Err(Error::GridShape { expected: 4, actual: 3, .. })
        ));
        assert!(LabelGrid::from_rows(&[vec![1, 2], vec![3]]).is_err());
    }

    #[test]
    fn fill_rect_and_iterate() {
        let mut g = LabelGrid::new(4, 4, 0);
        g.fill_rect(1, 3, 2, 10, 5);
        assert_eq!(g.get(1, 2), Some(5));
        assert_eq!(g.get(2, 3), Some(5));
        assert_eq!(g.get(3, 3), Some(0));
        assert_eq!(g.iter().filter(|&(_, _, v)| v == 5).count(), 4);
        let (y, x, _) = g.iter().nth(6).unwrap();
        assert_eq!((y, x), (1, 2));
    }
}
