// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The finished room/door graph of one plan.
//!
//! [`PlanGraph`] owns every room and door in slot maps. Relations and door
//! ownership are stored as keys, so the graph can be queried from either
//! side in O(1) without shared mutable references.

use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;

use crate::direction::Direction;
use crate::entities::{Door, DoorSide, Room};
use crate::error::{Error, Result};
use crate::keys::{DoorKey, RoomKey};

/// Rooms and doors of a single plan, with their relations.
///
/// Built once by [`PlanGraphBuilder`](crate::PlanGraphBuilder) and read-only
/// afterwards. Nothing is ever removed, so iteration follows insertion order.
#[derive(Debug, Default)]
pub struct PlanGraph {
    pub(crate) rooms: SlotMap<RoomKey, Room>,
    pub(crate) doors: SlotMap<DoorKey, Door>,
    pub(crate) room_ids: FxHashMap<u32, RoomKey>,
    pub(crate) front_door: Option<DoorKey>,
    pub(crate) interior_doors: Vec<DoorKey>,
}

impl PlanGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // --- Rooms ---

    /// Iterates rooms in the order they were created.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomKey, &Room)> {
        self.rooms.iter()
    }

    pub fn room(&self, key: RoomKey) -> Option<&Room> {
        self.rooms.get(key)
    }

    pub fn room_key(&self, id: u32) -> Option<RoomKey> {
        self.room_ids.get(&id).copied()
    }

    pub fn room_by_id(&self, id: u32) -> Option<&Room> {
        self.room_key(id).and_then(|key| self.rooms.get(key))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Rooms lying in `direction` from `room`.
    pub fn neighbors_of(&self, room: RoomKey, direction: Direction) -> impl Iterator<Item = &Room> {
        self.rooms
            .get(room)
            .map(|r| r.related(direction))
            .unwrap_or(&[])
            .iter()
            .filter_map(|&k| self.rooms.get(k))
    }

    /// Where `u` lies as seen from `v`, i.e. the direction under which
    /// `v` records `u`. `O` means `u` surrounds `v`, `I` that `u` is
    /// inside `v`. `None` if the rooms are not related.
    pub fn relation(&self, u: RoomKey, v: RoomKey) -> Option<Direction> {
        let v_room = self.rooms.get(v)?;
        v_room
            .relations()
            .iter()
            .find(|(_, rooms)| rooms.contains(&u))
            .map(|(&d, _)| d)
    }

    /// Sum of all room areas, in square pixels.
    pub fn total_area(&self) -> i64 {
        self.rooms.values().map(Room::area).sum()
    }

    // --- Doors ---

    pub fn door(&self, key: DoorKey) -> Option<&Door> {
        self.doors.get(key)
    }

    /// Iterates all doors, front door first.
    pub fn doors(&self) -> impl Iterator<Item = (DoorKey, &Door)> {
        self.front_door
            .into_iter()
            .chain(self.interior_doors.iter().copied())
            .filter_map(|k| self.doors.get(k).map(|d| (k, d)))
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    pub fn front_door(&self) -> Option<(DoorKey, &Door)> {
        let key = self.front_door?;
        self.doors.get(key).map(|d| (key, d))
    }

    /// Interior doors in id order.
    pub fn interior_doors(&self) -> impl Iterator<Item = (DoorKey, &Door)> {
        self.interior_doors
            .iter()
            .filter_map(|&k| self.doors.get(k).map(|d| (k, d)))
    }

    // --- Consistency ---

    /// Re-checks every graph invariant: reciprocal relations, door
    /// cardinality, door ids, and two-way door/room references.
    pub fn validate(&self) -> Result<()> {
        for (u, room) in self.rooms.iter() {
            for (&direction, related) in room.relations() {
                for &v in related {
                    let other = self.rooms.get(v).ok_or_else(|| {
                        Error::Inconsistent(format!("room {} relates to a missing room", room.id()))
                    })?;
                    if !other.related(direction.opposite()).contains(&u) {
                        return Err(Error::Inconsistent(format!(
                            "room {} records room {} as {} without the reciprocal {}",
                            room.id(),
                            other.id(),
                            direction,
                            direction.opposite()
                        )));
                    }
                }
            }

            for link in room.doors() {
                let door = self.doors.get(link.door).ok_or_else(|| {
                    Error::Inconsistent(format!("room {} lists a missing door", room.id()))
                })?;
                if !door.rooms().contains(&u) {
                    return Err(Error::Inconsistent(format!(
                        "room {} lists door {} which does not list the room",
                        room.id(),
                        door.id()
                    )));
                }
                let side_ok = match link.side {
                    DoorSide::Exterior => door.is_front_door(),
                    DoorSide::Room(other) => {
                        !door.is_front_door() && other != u && door.rooms().contains(&other)
                    }
                };
                if !side_ok {
                    return Err(Error::Inconsistent(format!(
                        "room {} has a mismatched far side for door {}",
                        room.id(),
                        door.id()
                    )));
                }
            }
        }

        let mut door_ids = FxHashSet::default();
        for (key, door) in self.doors.iter() {
            if !door_ids.insert(door.id()) {
                return Err(Error::Inconsistent(format!("door id {} is not unique", door.id())));
            }
            if door.is_front_door() != (door.id() == Door::FRONT_DOOR_ID) {
                return Err(Error::Inconsistent(format!(
                    "door id {} does not match its front-door flag",
                    door.id()
                )));
            }
            if door.rooms().len() != door.expected_rooms() {
                return Err(Error::Inconsistent(format!(
                    "door {} belongs to {} rooms, expected {}",
                    door.id(),
                    door.rooms().len(),
                    door.expected_rooms()
                )));
            }
            for &r in door.rooms() {
                let listed = self
                    .rooms
                    .get(r)
                    .is_some_and(|room| room.door_link(key).is_some());
                if !listed {
                    return Err(Error::Inconsistent(format!(
                        "door {} is not listed by one of its rooms",
                        door.id()
                    )));
                }
            }
        }

        Ok(())
    }
}
