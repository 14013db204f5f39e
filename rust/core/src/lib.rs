// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Floorplan-Graph Core
//!
//! Relation and graph extraction for segmented floor plans.
//!
//! Given per-pixel room-instance labels, the room regions derived from them,
//! and the door bounding boxes isolated by segmentation, this crate builds a
//! [`PlanGraph`]: an arena of rooms and doors connected by directional
//! adjacency relations and door-to-room assignments.
//!
//! ## Pipeline
//!
//! 1. [`extract_room_regions`] turns the instance and program label grids
//!    into room regions (bounding box + majority program).
//! 2. [`PlanGraphBuilder`] creates the rooms, runs the room-room pass, the
//!    interior door pass and the front-door pass.
//! 3. Consumers read the finished graph. It is never mutated afterwards.
//!
//! Rooms and doors live in slot maps; relations are stored as keys into
//! those maps, so the graph has no reference cycles.

pub mod bounds;
pub mod builder;
pub mod config;
pub mod direction;
pub mod entities;
pub mod error;
pub mod front_door;
pub mod geometry;
pub mod keys;
pub mod labels;
pub mod neighbors;
pub mod plan;
pub mod program;
pub mod regions;

pub use bounds::{BoundingBox, Point};
pub use builder::PlanGraphBuilder;
pub use config::GraphConfig;
pub use direction::{Direction, DoorDirection};
pub use entities::{Door, DoorLink, DoorSide, Room};
pub use error::{Error, Result};
pub use geometry::{collides, door_room_relation, point_box_relation};
pub use keys::{DoorKey, RoomKey};
pub use labels::LabelGrid;
pub use neighbors::neighbors;
pub use plan::PlanGraph;
pub use program::{Program, RoomType};
pub use regions::{extract_room_regions, RoomRegion};
