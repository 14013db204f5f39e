// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room and door records.
//!
//! Geometry and identity are fixed at construction. The relation, door and
//! ownership lists are appended to by [`PlanGraphBuilder`](crate::PlanGraphBuilder)
//! only, and are read-only to everyone else.

use std::collections::BTreeMap;

use crate::bounds::{BoundingBox, Point};
use crate::direction::{Direction, DoorDirection};
use crate::keys::{DoorKey, RoomKey};
use crate::program::{Program, RoomType};

/// What lies on the far side of a door, seen from one of its rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorSide {
    /// An interior door leads to another room.
    Room(RoomKey),
    /// The front door leads outside.
    Exterior,
}

/// A door as recorded on one of the rooms it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorLink {
    pub door: DoorKey,
    /// Door position relative to the room on the far side. Always set for
    /// interior doors. For the front door it is the position relative to the
    /// owning room, and `None` when the door sits off both of its spans.
    pub relation: Option<DoorDirection>,
    pub side: DoorSide,
}

/// A room: a bounding-box-approximated functional area.
#[derive(Debug, Clone)]
pub struct Room {
    id: u32,
    bounds: BoundingBox,
    program: Program,
    /// Neighbors keyed by the direction they lie in, seen from this room.
    relations: BTreeMap<Direction, Vec<RoomKey>>,
    doors: Vec<DoorLink>,
}

impl Room {
    pub fn new(id: u32, bounds: BoundingBox, program: Program) -> Self {
        Self {
            id,
            bounds,
            program,
            relations: BTreeMap::new(),
            doors: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn program(&self) -> Program {
        self.program
    }

    pub fn category(&self) -> &'static str {
        self.program.category()
    }

    pub fn room_type(&self) -> RoomType {
        self.program.room_type()
    }

    pub fn length(&self) -> i64 {
        self.bounds.length()
    }

    pub fn width(&self) -> i64 {
        self.bounds.width()
    }

    pub fn area(&self) -> i64 {
        self.bounds.area()
    }

    pub fn centroid(&self) -> Point {
        self.bounds.centroid()
    }

    /// All recorded relations, ordered by direction.
    pub fn relations(&self) -> &BTreeMap<Direction, Vec<RoomKey>> {
        &self.relations
    }

    /// Rooms lying in `direction` from this room.
    pub fn related(&self, direction: Direction) -> &[RoomKey] {
        self.relations.get(&direction).map_or(&[], Vec::as_slice)
    }

    /// Doors of this room, in the order they were registered.
    pub fn doors(&self) -> &[DoorLink] {
        &self.doors
    }

    pub fn door_link(&self, door: DoorKey) -> Option<&DoorLink> {
        self.doors.iter().find(|link| link.door == door)
    }

    pub(crate) fn add_relation(&mut self, direction: Direction, room: RoomKey) {
        self.relations.entry(direction).or_default().push(room);
    }

    pub(crate) fn add_door(&mut self, link: DoorLink) {
        self.doors.push(link);
    }
}

/// A door: a rectangular opening owned by one room (front door) or two
/// rooms (interior door).
#[derive(Debug, Clone)]
pub struct Door {
    id: u32,
    bounds: BoundingBox,
    front_door: bool,
    rooms: Vec<RoomKey>,
}

impl Door {
    /// Id reserved for the front door.
    pub const FRONT_DOOR_ID: u32 = 0;

    pub fn new(id: u32, bounds: BoundingBox, front_door: bool) -> Self {
        Self {
            id,
            bounds,
            front_door,
            rooms: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn is_front_door(&self) -> bool {
        self.front_door
    }

    /// Number of rooms a finished door must belong to.
    pub fn expected_rooms(&self) -> usize {
        if self.front_door {
            1
        } else {
            2
        }
    }

    pub fn length(&self) -> i64 {
        self.bounds.length()
    }

    pub fn width(&self) -> i64 {
        self.bounds.width()
    }

    pub fn centroid(&self) -> Point {
        self.bounds.centroid()
    }

    /// Owning rooms, in registration order.
    pub fn rooms(&self) -> &[RoomKey] {
        &self.rooms
    }

    pub(crate) fn add_room(&mut self, room: RoomKey) {
        self.rooms.push(room);
    }
}
