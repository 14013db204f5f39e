// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door isolation from the program channel.
//!
//! The front door is a single region. Interior doors share one mask and may
//! touch each other where walls meet, so the mask is split by a chessboard
//! distance transform: pixels deeper than one step from the mask edge seed
//! the regions, and seeds are flooded back over the mask breadth-first.

use std::collections::VecDeque;

use floorplan_graph_core::{BoundingBox, LabelGrid, Program};
use image::{GrayImage, Luma};
use imageproc::distance_transform::{distance_transform, Norm};
use imageproc::region_labelling::{connected_components, Connectivity};
use rustc_hash::FxHashMap;

use crate::error::{RasterError, Result};

const NEIGHBORS_8: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Bounding box of every pixel carrying the front door program.
pub fn front_door_box(program: &LabelGrid) -> Result<BoundingBox> {
    let code = Program::FrontDoor.code() as u32;
    bounding_box(program.iter().filter(|&(_, _, v)| v == code).map(|(y, x, _)| (y, x)))
        .ok_or(RasterError::NoFrontDoor)
}

/// Bounding boxes of the interior doors, in discovery order.
pub fn interior_door_boxes(program: &LabelGrid) -> Vec<BoundingBox> {
    let code = Program::InteriorDoor.code() as u32;
    let (h, w) = (program.height(), program.width());
    let mask: Vec<bool> = program.as_slice().iter().map(|&v| v == code).collect();
    if !mask.iter().any(|&m| m) {
        return Vec::new();
    }

    // Distance of each door pixel to the nearest non-door pixel.
    let outside = GrayImage::from_fn(w as u32, h as u32, |x, y| {
        Luma([if mask[y as usize * w + x as usize] { 0 } else { 255 }])
    });
    let distance = distance_transform(&outside, Norm::LInf);
    let seeds = GrayImage::from_fn(w as u32, h as u32, |x, y| {
        let inside = mask[y as usize * w + x as usize];
        Luma([if inside && distance.get_pixel(x, y).0[0] > 1 { 255 } else { 0 }])
    });
    let markers = connected_components(&seeds, Connectivity::Eight, Luma([0u8]));

    let mut labels = vec![0u32; h * w];
    let mut queue = VecDeque::new();
    for (x, y, p) in markers.enumerate_pixels() {
        if p.0[0] != 0 {
            labels[y as usize * w + x as usize] = p.0[0];
            queue.push_back((y as usize, x as usize));
        }
    }
    flood(&mask, &mut labels, &mut queue, h, w);

    // Thin door fragments without a seed become their own regions.
    let mut next = labels.iter().copied().max().unwrap_or(0);
    for start in 0..h * w {
        if mask[start] && labels[start] == 0 {
            next += 1;
            labels[start] = next;
            queue.push_back((start / w, start % w));
            flood(&mask, &mut labels, &mut queue, h, w);
        }
    }

    let mut pixels: FxHashMap<u32, Vec<(usize, usize)>> = FxHashMap::default();
    for (i, &label) in labels.iter().enumerate() {
        if label != 0 {
            pixels.entry(label).or_default().push((i / w, i % w));
        }
    }
    let mut ordered: Vec<u32> = pixels.keys().copied().collect();
    ordered.sort_unstable();

    let boxes: Vec<BoundingBox> = ordered
        .into_iter()
        .filter_map(|label| bounding_box(pixels[&label].iter().copied()))
        .collect();
    tracing::debug!(doors = boxes.len(), "isolated interior doors");
    boxes
}

/// Breadth-first growth of labelled pixels over unlabelled mask pixels.
fn flood(
    mask: &[bool],
    labels: &mut [u32],
    queue: &mut VecDeque<(usize, usize)>,
    h: usize,
    w: usize,
) {
    while let Some((y, x)) = queue.pop_front() {
        let label = labels[y * w + x];
        for (dy, dx) in NEIGHBORS_8 {
            let (ny, nx) = (y as i64 + dy, x as i64 + dx);
            if ny < 0 || nx < 0 || ny >= h as i64 || nx >= w as i64 {
                continue;
            }
            let idx = ny as usize * w + nx as usize;
            if mask[idx] && labels[idx] == 0 {
                labels[idx] = label;
                queue.push_back((ny as usize, nx as usize));
            }
        }
    }
}

/// Half-open bounding box of a pixel set.
fn bounding_box(pixels: impl Iterator<Item = (usize, usize)>) -> Option<BoundingBox> {
    pixels.fold(None, |acc, (y, x)| {
        let (y, x) = (y as i64, x as i64);
        Some(match acc {
            None => BoundingBox::new(y, y + 1, x, x + 1),
            Some(b) => BoundingBox::new(b.y0.min(y), b.y1.max(y + 1), b.x0.min(x), b.x1.max(x + 1)),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rects: &[(usize, usize, usize, usize, Program)]) -> LabelGrid {
        let mut g = LabelGrid::new(30, 30, Program::LivingRoom.code() as u32);
        for &(y0, y1, x0, x1, p) in rects {
            g.fill_rect(y0, y1, x0, x1, p.code() as u32);
        }
        g
    }

    #[test]
    fn front_door_covers_all_its_pixels() {
        let g = grid_with(&[(0, 2, 10, 16, Program::FrontDoor)]);
        assert_eq!(front_door_box(&g).unwrap(), BoundingBox::new(0, 2, 10, 16));
    }

    #[test]
    fn missing_front_door() {
        let g = grid_with(&[]);
        assert!(matches!(front_door_box(&g), Err(RasterError::NoFrontDoor)));
    }

    #[test]
    fn separate_doors_are_separate_regions() {
        let g = grid_with(&[
            (4, 8, 5, 15, Program::InteriorDoor),
            (20, 24, 5, 15, Program::InteriorDoor),
        ]);
        let boxes = interior_door_boxes(&g);
        assert_eq!(
            boxes,
            vec![BoundingBox::new(4, 8, 5, 15), BoundingBox::new(20, 24, 5, 15)]
        );
    }

    #[test]
    fn thin_door_without_seed_is_kept() {
        let g = grid_with(&[(10, 11, 3, 9, Program::InteriorDoor)]);
        assert_eq!(interior_door_boxes(&g), vec![BoundingBox::new(10, 11, 3, 9)]);
    }

    #[test]
    fn no_door_pixels_no_boxes() {
        assert!(interior_door_boxes(&grid_with(&[])).is_empty());
    }
}
