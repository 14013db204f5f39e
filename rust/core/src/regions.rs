// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room region extraction from label grids.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::error::{Error, Result};
use crate::labels::LabelGrid;
use crate::program::Program;

/// A room as delivered by segmentation: identity, box and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRegion {
    pub id: u32,
    pub bounds: BoundingBox,
    pub program: Program,
}

#[derive(Debug)]
struct RegionAccumulator {
    y0: usize,
    y1: usize,
    x0: usize,
    x1: usize,
    votes: FxHashMap<u32, usize>,
}

impl RegionAccumulator {
    fn new(y: usize, x: usize) -> Self {
        Self {
            y0: y,
            y1: y,
            x0: x,
            x1: x,
            votes: FxHashMap::default(),
        }
    }

    fn add(&mut self, y: usize, x: usize, program: u32) {
        self.y0 = self.y0.min(y);
        self.y1 = self.y1.max(y);
        self.x0 = self.x0.min(x);
        self.x1 = self.x1.max(x);
        *self.votes.entry(program).or_default() += 1;
    }

    /// Most frequent program code; ties go to the smallest code.
    fn majority(&self) -> Option<u32> {
        self.votes
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(&code, _)| code)
    }
}

/// Extracts one region per distinct non-zero instance label.
///
/// Each region's box is half-open (`y1`/`x1` one past the last pixel) and
/// its program is the majority vote of the program grid over its pixels.
/// Regions are returned in ascending id order.
pub fn extract_room_regions(instance: &LabelGrid, program: &LabelGrid) -> Result<Vec<RoomRegion>> {
    if instance.height() != program.height() || instance.width() != program.width() {
        return Err(Error::GridShape {
            height: instance.height(),
            width: instance.width(),
            expected: instance.height() * instance.width(),
            actual: program.height() * program.width(),
        });
    }

    let mut regions: FxHashMap<u32, RegionAccumulator> = FxHashMap::default();
    for ((y, x, id), &code) in instance.iter().zip(program.as_slice()) {
        if id == 0 {
            continue;
        }
        regions
            .entry(id)
            .or_insert_with(|| RegionAccumulator::new(y, x))
            .add(y, x, code);
    }

    let mut ids: Vec<u32> = regions.keys().copied().collect();
    ids.sort_unstable();

    let rooms = ids
        .into_iter()
        .map(|id| {
            let acc = &regions[&id];
            let code = acc.majority().unwrap_or(0);
            let program = Program::from_code(code).ok_or(Error::AmbiguousCategory { room_id: id, code })?;
            Ok(RoomRegion {
                id,
                bounds: BoundingBox::new(
                    acc.y0 as i64,
                    acc.y1 as i64 + 1,
                    acc.x0 as i64,
                    acc.x1 as i64 + 1,
                ),
                program,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(rooms = rooms.len(), "extracted room regions");
    Ok(rooms)
}
