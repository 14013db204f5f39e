// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room adjacency graph construction.
//!
//! The build runs three passes in order over freshly created rooms:
//!
//! 1. **Room-room**: every unordered pair of rooms within the collision
//!    margin gets a direction and its reciprocal.
//! 2. **Interior doors**: each door is resolved to exactly two rooms and
//!    registered on both.
//! 3. **Front door**: the entrance is resolved to exactly one room (see
//!    [`front_door`](crate::front_door)).
//!
//! Entities are single-use: a graph is built once and then only read. Any
//! failure rejects the whole plan.

use crate::bounds::BoundingBox;
use crate::config::GraphConfig;
use crate::direction::{Direction, DoorDirection};
use crate::entities::{Door, DoorLink, DoorSide, Room};
use crate::error::{Error, Result};
use crate::front_door::attach_front_door;
use crate::geometry::{collides, door_room_relation, point_box_relation};
use crate::keys::RoomKey;
use crate::labels::LabelGrid;
use crate::neighbors::neighbors;
use crate::plan::PlanGraph;
use crate::regions::RoomRegion;

/// Builds a [`PlanGraph`] from segmented rooms and door boxes.
///
/// # Example
///
/// ```
/// use floorplan_graph_core::{
///     BoundingBox, Direction, LabelGrid, PlanGraphBuilder, Program, RoomRegion,
/// };
///
/// let mut instance = LabelGrid::new(12, 24, 0);
/// instance.fill_rect(1, 11, 1, 11, 1);
/// instance.fill_rect(1, 11, 13, 23, 2);
///
/// let rooms = vec![
///     RoomRegion { id: 1, bounds: BoundingBox::new(1, 11, 1, 11), program: Program::Kitchen },
///     RoomRegion { id: 2, bounds: BoundingBox::new(1, 11, 13, 23), program: Program::LivingRoom },
/// ];
/// let doors = vec![BoundingBox::new(4, 8, 11, 12)];
/// let front_door = BoundingBox::new(0, 1, 16, 20);
///
/// let plan = PlanGraphBuilder::default()
///     .build(&rooms, &instance, &doors, front_door)
///     .unwrap();
///
/// let kitchen = plan.room_key(1).unwrap();
/// let living = plan.room_key(2).unwrap();
/// assert_eq!(plan.relation(kitchen, living), Some(Direction::W));
/// assert_eq!(plan.door_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlanGraphBuilder {
    config: GraphConfig,
}

impl PlanGraphBuilder {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Runs every pass and returns the validated graph.
    ///
    /// `interior_doors` are numbered 1..N in the order given; the front door
    /// gets id 0.
    pub fn build(
        &self,
        rooms: &[RoomRegion],
        instance: &LabelGrid,
        interior_doors: &[BoundingBox],
        front_door: BoundingBox,
    ) -> Result<PlanGraph> {
        let mut graph = PlanGraph::new();

        for region in rooms {
            add_room(&mut graph, region)?;
        }

        self.relate_rooms(&mut graph)?;

        for (id, &bounds) in (1u32..).zip(interior_doors) {
            attach_interior_door(&mut graph, instance, id, bounds)?;
        }
        tracing::debug!(doors = interior_doors.len(), "registered interior doors");

        attach_front_door(&mut graph, instance, front_door)?;

        graph.validate()?;
        tracing::debug!(
            rooms = graph.room_count(),
            doors = graph.door_count(),
            "plan graph built"
        );
        Ok(graph)
    }

    /// Room-room pass over every unordered pair.
    fn relate_rooms(&self, graph: &mut PlanGraph) -> Result<()> {
        let keys: Vec<RoomKey> = graph.rooms.keys().collect();
        let mut relations = 0usize;

        for (i, &u) in keys.iter().enumerate() {
            for &v in &keys[i + 1..] {
                let (u_room, v_room) = (&graph.rooms[u], &graph.rooms[v]);
                if !collides(u_room.bounds(), v_room.bounds(), self.config.collision_margin) {
                    continue;
                }
                let relation = classify_pair(u_room, v_room)?;

                // v records u under u's direction from v, and vice versa.
                graph.rooms[u].add_relation(relation.opposite(), v);
                graph.rooms[v].add_relation(relation, u);
                relations += 1;
            }
        }

        tracing::debug!(pairs = relations, "related rooms");
        Ok(())
    }
}

/// Direction of `u` as seen from `v`.
fn classify_pair(u: &Room, v: &Room) -> Result<Direction> {
    if u.bounds().contains_strictly(v.bounds()) {
        return Ok(Direction::O);
    }
    if u.bounds().is_within(v.bounds()) {
        return Ok(Direction::I);
    }
    point_box_relation(u.centroid(), v.bounds()).ok_or(Error::UnclassifiableRelation {
        room_id: u.id(),
        room_bounds: *u.bounds(),
        other_id: v.id(),
        other_bounds: *v.bounds(),
    })
}

fn add_room(graph: &mut PlanGraph, region: &RoomRegion) -> Result<RoomKey> {
    if graph.room_ids.contains_key(&region.id) {
        return Err(Error::DuplicateRoom(region.id));
    }
    let key = graph
        .rooms
        .insert(Room::new(region.id, region.bounds, region.program));
    graph.room_ids.insert(region.id, key);
    Ok(key)
}

/// Resolves the rooms flanking a door and checks their count.
pub(crate) fn resolve_door_rooms(
    graph: &PlanGraph,
    instance: &LabelGrid,
    door: &Door,
) -> Result<Vec<RoomKey>> {
    let ids = neighbors(instance, door.bounds());
    if ids.len() != door.expected_rooms() {
        return Err(Error::DoorCardinality {
            door_id: door.id(),
            bounds: *door.bounds(),
            expected: door.expected_rooms(),
            found: ids,
        });
    }
    ids.into_iter()
        .map(|room_id| {
            graph.room_key(room_id).ok_or(Error::UnknownRoom {
                door_id: door.id(),
                room_id,
                bounds: *door.bounds(),
            })
        })
        .collect()
}

fn door_relation(
    graph: &PlanGraph,
    door: &Door,
    room: RoomKey,
) -> Result<DoorDirection> {
    let room = &graph.rooms[room];
    door_room_relation(door.bounds(), room.bounds()).ok_or(Error::UnclassifiableDoorRelation {
        door_id: door.id(),
        door_bounds: *door.bounds(),
        room_id: room.id(),
        room_bounds: *room.bounds(),
    })
}

/// Door-room pass for one interior door.
///
/// Both rooms get a link whose relation is the door's position relative to
/// the *other* room. The neighbor list is unordered, so each side is computed
/// independently.
fn attach_interior_door(
    graph: &mut PlanGraph,
    instance: &LabelGrid,
    id: u32,
    bounds: BoundingBox,
) -> Result<()> {
    let mut door = Door::new(id, bounds, false);
    let owners = resolve_door_rooms(graph, instance, &door)?;
    let (first, second) = (owners[0], owners[1]);

    let seen_from_second = door_relation(graph, &door, second)?;
    let seen_from_first = door_relation(graph, &door, first)?;

    door.add_room(first);
    door.add_room(second);
    let key = graph.doors.insert(door);
    graph.interior_doors.push(key);

    graph.rooms[first].add_door(DoorLink {
        door: key,
        relation: Some(seen_from_second),
        side: DoorSide::Room(second),
    });
    graph.rooms[second].add_door(DoorLink {
        door: key,
        relation: Some(seen_from_first),
        side: DoorSide::Room(first),
    });
    Ok(())
}
