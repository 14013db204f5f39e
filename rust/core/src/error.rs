// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for plan graph construction.
//!
//! Every variant is a construction-time failure: a plan that produces one is
//! rejected as a whole. Variants carry the ids and boxes needed to trace the
//! problem back to the segmentation that produced the input.

use crate::bounds::BoundingBox;

/// Result type alias for plan graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or validating a plan graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A program code outside the fixed category table.
    #[error("unknown program code {0}")]
    UnknownProgram(u32),

    /// The majority program label of a room region is not a known code.
    #[error("room {room_id} has majority program code {code}, which is not a known category")]
    AmbiguousCategory { room_id: u32, code: u32 },

    /// Two room regions share the same instance id.
    #[error("room id {0} appears more than once")]
    DuplicateRoom(u32),

    /// Door neighbor resolution returned an id with no matching room.
    #[error("door {door_id} at {bounds} references unknown room {room_id}")]
    UnknownRoom {
        door_id: u32,
        room_id: u32,
        bounds: BoundingBox,
    },

    /// Door neighbor resolution returned the wrong number of rooms.
    #[error("door {door_id} at {bounds} resolved to rooms {found:?}, expected {expected}")]
    DoorCardinality {
        door_id: u32,
        bounds: BoundingBox,
        expected: usize,
        found: Vec<u32>,
    },

    /// The point-in-box classifier matched no region for two adjacent rooms.
    #[error("no relation between room {room_id} ({room_bounds}) and room {other_id} ({other_bounds})")]
    UnclassifiableRelation {
        room_id: u32,
        room_bounds: BoundingBox,
        other_id: u32,
        other_bounds: BoundingBox,
    },

    /// The door classifier matched no region for a door and a room.
    #[error("no relation between door {door_id} ({door_bounds}) and room {room_id} ({room_bounds})")]
    UnclassifiableDoorRelation {
        door_id: u32,
        door_bounds: BoundingBox,
        room_id: u32,
        room_bounds: BoundingBox,
    },

    /// A label grid's data does not match its declared shape.
    #[error("label grid of {height}x{width} needs {expected} cells, got {actual}")]
    GridShape {
        height: usize,
        width: usize,
        expected: usize,
        actual: usize,
    },

    /// A finished graph violates one of its invariants.
    #[error("inconsistent plan graph: {0}")]
    Inconsistent(String),
}
