// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Front-door resolution.
//!
//! The entrance is the one door with a single owner: neighbor sampling finds
//! background on its exterior side, so exactly one room id must come back.

use crate::bounds::BoundingBox;
use crate::builder::resolve_door_rooms;
use crate::entities::{Door, DoorLink, DoorSide};
use crate::geometry::door_room_relation;
use crate::error::Result;
use crate::labels::LabelGrid;
use crate::plan::PlanGraph;

/// Front-door pass: the entrance belongs to exactly one room.
///
/// The room records the door's position relative to itself, with the
/// exterior on the far side. A position that fits no wall band is left
/// unset.
pub(crate) fn attach_front_door(
    graph: &mut PlanGraph,
    instance: &LabelGrid,
    bounds: BoundingBox,
) -> Result<()> {
    let mut door = Door::new(Door::FRONT_DOOR_ID, bounds, true);
    let owners = resolve_door_rooms(graph, instance, &door)?;
    let owner = owners[0];
    let relation = door_room_relation(door.bounds(), graph.rooms[owner].bounds());
    if relation.is_none() {
        tracing::debug!(
            door = %door.bounds(),
            room = %graph.rooms[owner].bounds(),
            "front door lies off the room's spans"
        );
    }

    door.add_room(owner);
    let key = graph.doors.insert(door);
    graph.front_door = Some(key);
    graph.rooms[owner].add_door(DoorLink {
        door: key,
        relation,
        side: DoorSide::Exterior,
    });

    tracing::debug!(room = graph.rooms[owner].id(), "registered front door");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::program::Program;
    use crate::regions::RoomRegion;
    use crate::PlanGraphBuilder;

    fn single_room() -> (Vec<RoomRegion>, LabelGrid) {
        let mut instance = LabelGrid::new(20, 20, 0);
        instance.fill_rect(2, 18, 2, 18, 5);
        let rooms = vec![RoomRegion {
            id: 5,
            bounds: BoundingBox::new(2, 18, 2, 18),
            program: Program::Entrance,
        }];
        (rooms, instance)
    }

    #[test]
    fn front_door_owns_one_room() {
        let (rooms, instance) = single_room();
        // On the west wall, level with the room centroid.
        let plan = PlanGraphBuilder::default()
            .build(&rooms, &instance, &[], BoundingBox::new(8, 12, 0, 2))
            .unwrap();

        let (key, door) = plan.front_door().unwrap();
        assert!(door.is_front_door());
        assert_eq!(door.id(), 0);
        assert_eq!(door.rooms().len(), 1);

        let room = plan.room_by_id(5).unwrap();
        let link = room.door_link(key).unwrap();
        assert_eq!(link.side, DoorSide::Exterior);
        assert_eq!(link.relation, Some(crate::DoorDirection::W));
    }

    #[test]
    fn front_door_on_room_corner_is_kept() {
        let (rooms, instance) = single_room();
        // Straddles the north-west corner: above the room, left of its columns.
        let plan = PlanGraphBuilder::default()
            .build(&rooms, &instance, &[], BoundingBox::new(0, 2, 0, 4))
            .unwrap();

        let (key, door) = plan.front_door().unwrap();
        assert_eq!(door.rooms().len(), 1);
        let link = plan.room_by_id(5).unwrap().door_link(key).unwrap();
        assert_eq!(link.side, DoorSide::Exterior);
        assert_eq!(link.relation, None);
    }

    #[test]
    fn front_door_between_two_rooms_is_rejected() {
        let mut instance = LabelGrid::new(20, 20, 0);
        instance.fill_rect(0, 2, 0, 20, 6);
        instance.fill_rect(3, 18, 2, 18, 5);
        let rooms = vec![
            RoomRegion {
                id: 5,
                bounds: BoundingBox::new(3, 18, 2, 18),
                program: Program::Entrance,
            },
            RoomRegion {
                id: 6,
                bounds: BoundingBox::new(0, 2, 0, 20),
                program: Program::Balcony,
            },
        ];
        let result =
            PlanGraphBuilder::default().build(&rooms, &instance, &[], BoundingBox::new(2, 3, 8, 12));
        assert!(matches!(
            result,
            Err(Error::DoorCardinality { door_id: 0, expected: 1, .. })
        ));
    }
}
