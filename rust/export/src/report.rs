// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plain-text plan report.

use std::fmt;

use floorplan_graph_core::{DoorSide, PlanGraph, RoomKey};

/// Plain-text view of a plan: every room with its relations and doors, then
/// a door summary, then the total area.
pub struct Report<'a>(pub &'a PlanGraph);

impl Report<'_> {
    fn room_id(&self, key: RoomKey) -> u32 {
        self.0.room(key).map_or(0, |r| r.id())
    }

    fn write_rooms(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        for (_, room) in plan.rooms() {
            writeln!(f, "\n========== Room {:<2} ==========", room.id())?;
            writeln!(f, "Type: {}", room.room_type())?;
            writeln!(f, "Category: {}", room.category())?;
            writeln!(f, "Dimensions: {} by {} pixels", room.length(), room.width())?;
            writeln!(f, "Area: {} square pixels", room.area())?;

            for (direction, related) in room.relations() {
                write!(f, "{}:", direction)?;
                for &key in related {
                    write!(f, " Room {}", self.room_id(key))?;
                }
                writeln!(f)?;
            }

            for link in room.doors() {
                let door_id = plan.door(link.door).map_or(0, |d| d.id());
                match (link.side, link.relation) {
                    (DoorSide::Room(other), Some(relation)) => writeln!(
                        f,
                        "Door {}: {} of room {}",
                        door_id,
                        relation,
                        self.room_id(other)
                    )?,
                    (DoorSide::Room(other), None) => {
                        writeln!(f, "Door {}: to room {}", door_id, self.room_id(other))?
                    }
                    (DoorSide::Exterior, Some(relation)) => {
                        writeln!(f, "Door {}: {} of the exterior", door_id, relation)?
                    }
                    (DoorSide::Exterior, None) => writeln!(f, "Door {}: to the exterior", door_id)?,
                }
            }
        }
        Ok(())
    }

    fn write_doors(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let owners = |rooms: &[RoomKey], sep: &str| {
            rooms
                .iter()
                .map(|&k| self.room_id(k).to_string())
                .collect::<Vec<_>>()
                .join(sep)
        };

        writeln!(f, "\n========== {} Doors ==========", plan.door_count())?;
        if let Some((_, door)) = plan.front_door() {
            writeln!(f, "Front Door {}: Room {}", door.id(), owners(door.rooms(), ", "))?;
        }
        for (_, door) in plan.interior_doors() {
            writeln!(f, "Interior Door {}: Room {}", door.id(), owners(door.rooms(), " and "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rooms(f)?;
        self.write_doors(f)?;
        writeln!(f, "\n========== Overview ==========")?;
        writeln!(f, "Total Area: {}", self.0.total_area())
    }
}

/// Renders the full [`Report`] of `plan`.
pub fn render_report(plan: &PlanGraph) -> String {
    Report(plan).to_string()
}
