// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON export keyed by integer room and door ids.
//!
//! Arena keys never leave the process: every reference is rewritten to the
//! room or door id it points at.

use std::collections::BTreeMap;

use floorplan_graph_core::{BoundingBox, Door, DoorSide, PlanGraph, Point, Room, RoomKey};
use serde::{Deserialize, Serialize};

use crate::ExportError;

/// Where a plan came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSource {
    pub image_path: String,
    pub height: usize,
    pub width: usize,
}

/// Serializable view of a whole plan.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSnapshot {
    pub image_path: String,
    pub height: usize,
    pub width: usize,
    pub front_door: BTreeMap<u32, DoorSnapshot>,
    pub interior_doors: BTreeMap<u32, DoorSnapshot>,
    pub rooms: BTreeMap<u32, RoomSnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoomSnapshot {
    #[serde(rename = "type")]
    pub room_type: String,
    pub category: String,
    pub bounds: BoundingBox,
    pub length: i64,
    pub width: i64,
    pub area: i64,
    pub centroid: Point,
    /// Direction label → ids of the rooms lying that way.
    pub relations: BTreeMap<String, Vec<u32>>,
    pub doors: BTreeMap<u32, DoorLinkSnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DoorLinkSnapshot {
    /// `null` for a front door that fits no wall band.
    pub relation: Option<String>,
    /// Room on the far side, `null` for the exterior.
    pub room: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorSnapshot {
    pub is_front_door: bool,
    pub bounds: BoundingBox,
    pub length: i64,
    pub width: i64,
    pub centroid: Point,
    pub rooms: Vec<u32>,
}

impl PlanSnapshot {
    /// Captures `plan` with its source metadata.
    pub fn capture(plan: &PlanGraph, source: &PlanSource) -> Self {
        let room_id = |key: RoomKey| plan.room(key).map_or(0, Room::id);

        let rooms = plan
            .rooms()
            .map(|(_, room)| (room.id(), room_snapshot(plan, room, &room_id)))
            .collect();
        let front_door = plan
            .front_door()
            .map(|(_, d)| (d.id(), door_snapshot(d, &room_id)))
            .into_iter()
            .collect();
        let interior_doors = plan
            .interior_doors()
            .map(|(_, d)| (d.id(), door_snapshot(d, &room_id)))
            .collect();

        Self {
            image_path: source.image_path.clone(),
            height: source.height,
            width: source.width,
            front_door,
            interior_doors,
            rooms,
        }
    }
}

fn room_snapshot(plan: &PlanGraph, room: &Room, room_id: &impl Fn(RoomKey) -> u32) -> RoomSnapshot {
    let relations = room
        .relations()
        .iter()
        .map(|(d, keys)| (d.to_string(), keys.iter().map(|&k| room_id(k)).collect()))
        .collect();
    let doors = room
        .doors()
        .iter()
        .filter_map(|link| {
            let door = plan.door(link.door)?;
            let far = match link.side {
                DoorSide::Room(other) => Some(room_id(other)),
                DoorSide::Exterior => None,
            };
            Some((
                door.id(),
                DoorLinkSnapshot {
                    relation: link.relation.map(|r| r.to_string()),
                    room: far,
                },
            ))
        })
        .collect();

    RoomSnapshot {
        room_type: room.room_type().to_string(),
        category: room.category().to_string(),
        bounds: *room.bounds(),
        length: room.length(),
        width: room.width(),
        area: room.area(),
        centroid: room.centroid(),
        relations,
        doors,
    }
}

fn door_snapshot(door: &Door, room_id: &impl Fn(RoomKey) -> u32) -> DoorSnapshot {
    DoorSnapshot {
        is_front_door: door.is_front_door(),
        bounds: *door.bounds(),
        length: door.length(),
        width: door.width(),
        centroid: door.centroid(),
        rooms: door.rooms().iter().map(|&k| room_id(k)).collect(),
    }
}

/// Serializes `plan` as pretty-printed JSON.
pub fn to_json(plan: &PlanGraph, source: &PlanSource) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&PlanSnapshot::capture(plan, source))?)
}
