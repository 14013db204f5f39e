// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door-room neighbor resolution.
//!
//! A door sits inside a wall. The rooms it connects are found by sampling
//! the instance labels on the two lines just outside the door's box, across
//! its short axis.

use crate::bounds::BoundingBox;
use crate::labels::LabelGrid;

/// Returns the distinct non-background room ids flanking `door`.
///
/// For a door taller than wide, columns `x0 - 1` and `x1 + 1` are sampled
/// over rows `y0..y1`; otherwise rows `y0 - 1` and `y1 + 1` over columns
/// `x0..x1`. Samples outside the grid count as background.
///
/// The ids come back sorted, but the order carries no meaning: callers must
/// not read the first id as one particular side of the door.
pub fn neighbors(instance: &LabelGrid, door: &BoundingBox) -> Vec<u32> {
    let samples: Vec<Option<u32>> = if door.length() > door.width() {
        (door.y0..door.y1)
            .flat_map(|y| [instance.get(y, door.x0 - 1), instance.get(y, door.x1 + 1)])
            .collect()
    } else {
        (door.x0..door.x1)
            .flat_map(|x| [instance.get(door.y0 - 1, x), instance.get(door.y1 + 1, x)])
            .collect()
    };

    let mut ids: Vec<u32> = samples.into_iter().flatten().filter(|&v| v != 0).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_door_samples_above_and_below() {
        let mut grid = LabelGrid::new(20, 30, 0);
        grid.fill_rect(0, 5, 0, 30, 3);
        grid.fill_rect(7, 20, 0, 30, 7);
        let door = BoundingBox::new(5, 6, 10, 15);
        assert_eq!(neighbors(&grid, &door), vec![3, 7]);
    }

    #[test]
    fn tall_door_samples_left_and_right() {
        let mut grid = LabelGrid::new(30, 30, 0);
        grid.fill_rect(0, 30, 0, 10, 4);
        grid.fill_rect(0, 30, 14, 30, 2);
        let door = BoundingBox::new(8, 16, 10, 13);
        assert_eq!(neighbors(&grid, &door), vec![2, 4]);
    }

    #[test]
    fn background_side_is_dropped() {
        let mut grid = LabelGrid::new(20, 20, 0);
        grid.fill_rect(8, 20, 0, 20, 5);
        let door = BoundingBox::new(5, 7, 4, 12);
        assert_eq!(neighbors(&grid, &door), vec![5]);
    }

    #[test]
    fn samples_off_the_grid_are_background() {
        let mut grid = LabelGrid::new(10, 10, 0);
        grid.fill_rect(3, 10, 0, 10, 9);
        let door = BoundingBox::new(0, 2, 2, 8);
        assert_eq!(neighbors(&grid, &door), vec![9]);
    }

    #[test]
    fn square_door_is_treated_as_wide() {
        let mut grid = LabelGrid::new(20, 20, 0);
        grid.fill_rect(0, 5, 0, 20, 1);
        grid.fill_rect(8, 20, 0, 20, 6);
        grid.fill_rect(0, 20, 0, 3, 11);
        let door = BoundingBox::new(5, 7, 5, 7);
        assert_eq!(neighbors(&grid, &door), vec![1, 6]);
    }
}
