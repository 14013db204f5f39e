// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan raster decoding and segmentation
//!
//! This crate feeds [`floorplan_graph_core`] from colour-coded floor plan
//! images:
//! 1. Decoding the program and instance channels
//! 2. Extracting room regions (box + majority program)
//! 3. Isolating the front door and the interior doors
//! 4. Building the room/door graph
//!
//! # Usage
//!
//! ```rust,ignore
//! use floorplan_graph_core::GraphConfig;
//! use floorplan_graph_raster::detect_plan;
//!
//! let detected = detect_plan(Path::new("plan.png"), &GraphConfig::default())?;
//! println!("{} rooms", detected.graph.room_count());
//! ```

pub mod decode;
pub mod doors;
pub mod error;
pub mod palette;

pub use decode::{decode_rgba, encode_rgba, load_plan, PlanRaster};
pub use doors::{front_door_box, interior_door_boxes};
pub use error::{RasterError, Result};

use std::path::Path;

use floorplan_graph_core::{
    extract_room_regions, BoundingBox, GraphConfig, PlanGraph, PlanGraphBuilder, RoomRegion,
};

/// Everything segmentation hands to the graph builder.
#[derive(Debug, Clone)]
pub struct SegmentedPlan {
    pub raster: PlanRaster,
    pub rooms: Vec<RoomRegion>,
    pub interior_doors: Vec<BoundingBox>,
    pub front_door: BoundingBox,
}

impl SegmentedPlan {
    /// Builds the room/door graph of this plan.
    pub fn build_graph(&self, config: &GraphConfig) -> Result<PlanGraph> {
        let graph = PlanGraphBuilder::new(config.clone()).build(
            &self.rooms,
            &self.raster.instance,
            &self.interior_doors,
            self.front_door,
        )?;
        Ok(graph)
    }
}

/// A plan graph together with the segmentation it came from.
#[derive(Debug)]
pub struct DetectedPlan {
    pub segmented: SegmentedPlan,
    pub graph: PlanGraph,
}

/// Segments decoded label grids into rooms and doors.
pub fn segment(raster: PlanRaster) -> Result<SegmentedPlan> {
    let rooms = extract_room_regions(&raster.instance, &raster.program)?;
    let interior_doors = interior_door_boxes(&raster.program);
    let front_door = front_door_box(&raster.program)?;
    Ok(SegmentedPlan {
        raster,
        rooms,
        interior_doors,
        front_door,
    })
}

/// Full pipeline: load, segment and build the graph of one plan image.
pub fn detect_plan(path: &Path, config: &GraphConfig) -> Result<DetectedPlan> {
    let segmented = segment(load_plan(path)?)?;
    let graph = segmented.build_graph(config)?;
    tracing::info!(
        path = %path.display(),
        rooms = graph.room_count(),
        doors = graph.door_count(),
        "plan graph extracted"
    );
    Ok(DetectedPlan { segmented, graph })
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_graph_core::{DoorSide, LabelGrid, Program};

    /// Two rooms split by an interior wall with one door, front door on the
    /// north exterior wall of room 1.
    fn two_room_raster() -> PlanRaster {
        let wall = Program::ExteriorWall.code() as u32;
        let mut program = LabelGrid::new(24, 40, Program::ExternalArea.code() as u32);
        program.fill_rect(1, 23, 1, 39, wall);
        program.fill_rect(3, 21, 3, 19, Program::Kitchen.code() as u32);
        program.fill_rect(3, 21, 19, 22, Program::InteriorWall.code() as u32);
        program.fill_rect(3, 21, 22, 37, Program::Bathroom.code() as u32);
        program.fill_rect(8, 14, 19, 22, Program::InteriorDoor.code() as u32);
        program.fill_rect(1, 3, 8, 14, Program::FrontDoor.code() as u32);

        let mut instance = LabelGrid::new(24, 40, 0);
        instance.fill_rect(3, 21, 3, 19, 1);
        instance.fill_rect(3, 21, 22, 37, 2);
        PlanRaster { program, instance }
    }

    #[test]
    fn segment_and_build() {
        let plan = segment(two_room_raster()).unwrap();
        assert_eq!(plan.rooms.len(), 2);
        assert_eq!(plan.rooms[0].program, Program::Kitchen);
        assert_eq!(plan.interior_doors, vec![BoundingBox::new(8, 14, 19, 22)]);
        assert_eq!(plan.front_door, BoundingBox::new(1, 3, 8, 14));

        let graph = plan.build_graph(&GraphConfig::default()).unwrap();
        assert_eq!(graph.door_count(), 2);
        let (front, _) = graph.front_door().unwrap();
        let kitchen = graph.room_by_id(1).unwrap();
        assert_eq!(kitchen.door_link(front).unwrap().side, DoorSide::Exterior);
    }

    #[test]
    fn detect_from_png_file() {
        let dir = std::env::temp_dir().join(format!("fpg-raster-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("plan.png");
        encode_rgba(&two_room_raster()).save(&path).unwrap();

        let detected = detect_plan(&path, &GraphConfig::default()).unwrap();
        assert_eq!(detected.graph.room_count(), 2);
        assert_eq!(detected.segmented.raster.width(), 40);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_reports_path() {
        let err = detect_plan(Path::new("/nonexistent/plan.png"), &GraphConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/plan.png"));
    }
}
