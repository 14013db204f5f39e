// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end graph construction over small synthetic plans.

use floorplan_graph_core::{
    extract_room_regions, BoundingBox, Direction, DoorSide, Error, LabelGrid, PlanGraph,
    PlanGraphBuilder, Program,
};

/// A 40x40 plan with four rooms and 2px interior walls:
///
/// ```text
///   cols  1..19   21..39
///  rows 1..19    [1 Living ] [2 Kitchen]
///  rows 21..39   [3 Master ] [4 Bath   ]
/// ```
///
/// Doors: 1-2 (vertical wall), 1-3 (horizontal wall), 2-4 (horizontal
/// wall). Front door on the north exterior wall of room 1.
fn four_room_plan() -> (LabelGrid, LabelGrid, Vec<BoundingBox>, BoundingBox) {
    let mut instance = LabelGrid::new(40, 40, 0);
    let mut program = LabelGrid::new(40, 40, Program::ExteriorWall.code() as u32);

    let rooms = [
        (1, (1, 19, 1, 19), Program::LivingRoom),
        (2, (1, 19, 21, 39), Program::Kitchen),
        (3, (21, 39, 1, 19), Program::MasterRoom),
        (4, (21, 39, 21, 39), Program::Bathroom),
    ];
    for (id, (y0, y1, x0, x1), p) in rooms {
        instance.fill_rect(y0, y1, x0, x1, id);
        program.fill_rect(y0, y1, x0, x1, p.code() as u32);
    }

    let doors = vec![
        BoundingBox::new(6, 12, 19, 21),
        BoundingBox::new(19, 21, 6, 12),
        BoundingBox::new(19, 21, 26, 32),
    ];
    let front_door = BoundingBox::new(0, 1, 6, 12);
    (instance, program, doors, front_door)
}

fn build() -> PlanGraph {
    let (instance, program, doors, front_door) = four_room_plan();
    let regions = extract_room_regions(&instance, &program).unwrap();
    PlanGraphBuilder::default()
        .build(&regions, &instance, &doors, front_door)
        .unwrap()
}

#[test]
fn relations_are_reciprocal() {
    let plan = build();
    let mut count = 0;
    for (u, room) in plan.rooms() {
        for (&d, related) in room.relations() {
            for &v in related {
                assert!(plan.room(v).unwrap().related(d.opposite()).contains(&u));
                count += 1;
            }
        }
    }
    // Every pair touches within the margin, diagonals included.
    assert_eq!(count, 12);
    plan.validate().unwrap();
}

#[test]
fn compass_directions_between_quadrants() {
    let plan = build();
    let key = |id| plan.room_key(id).unwrap();

    // Living room is west of the kitchen and north of the master room.
    assert_eq!(plan.relation(key(1), key(2)), Some(Direction::W));
    assert_eq!(plan.relation(key(2), key(1)), Some(Direction::E));
    assert_eq!(plan.relation(key(1), key(3)), Some(Direction::N));
    assert_eq!(plan.relation(key(1), key(4)), Some(Direction::NW));
    assert_eq!(plan.relation(key(4), key(1)), Some(Direction::SE));

    let living = plan.room(key(1)).unwrap();
    assert_eq!(living.related(Direction::E), &[key(2)]);
    assert_eq!(living.related(Direction::S), &[key(3)]);
    assert_eq!(living.related(Direction::SE), &[key(4)]);

    let north_of_master: Vec<u32> = plan
        .neighbors_of(key(3), Direction::N)
        .map(|r| r.id())
        .collect();
    assert_eq!(north_of_master, vec![1]);
}

#[test]
fn door_cardinality_and_links() {
    let plan = build();
    assert_eq!(plan.door_count(), 4);

    let (front_key, front) = plan.front_door().unwrap();
    assert_eq!(front.id(), 0);
    assert_eq!(front.rooms(), &[plan.room_key(1).unwrap()]);
    let link = plan.room_by_id(1).unwrap().door_link(front_key).unwrap();
    assert_eq!(link.side, DoorSide::Exterior);

    let ids: Vec<u32> = plan.interior_doors().map(|(_, d)| d.id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    for (key, door) in plan.interior_doors() {
        assert_eq!(door.rooms().len(), 2);
        for &r in door.rooms() {
            let link = plan.room(r).unwrap().door_link(key).unwrap();
            match link.side {
                DoorSide::Room(other) => {
                    assert_ne!(other, r);
                    assert!(door.rooms().contains(&other));
                }
                DoorSide::Exterior => panic!("interior door leads outside"),
            }
        }
    }

    // Door 3 joins kitchen and bathroom.
    let (_, door3) = plan.interior_doors().nth(2).unwrap();
    let mut owners: Vec<u32> = door3
        .rooms()
        .iter()
        .map(|&k| plan.room(k).unwrap().id())
        .collect();
    owners.sort_unstable();
    assert_eq!(owners, vec![2, 4]);
}

#[test]
fn categories_follow_majority_program() {
    let plan = build();
    let master = plan.room_by_id(3).unwrap();
    assert_eq!(master.category(), "Master Room");
    assert_eq!(master.room_type().as_str(), "Bedroom");
    assert_eq!(master.bounds(), &BoundingBox::new(21, 39, 1, 19));
    assert_eq!(plan.total_area(), 4 * 18 * 18);
}

#[test]
fn worked_example_gap_within_margin() {
    let mut instance = LabelGrid::new(12, 22, 0);
    instance.fill_rect(0, 10, 0, 10, 1);
    instance.fill_rect(0, 10, 12, 20, 2);
    let program = LabelGrid::new(12, 22, Program::StudyRoom.code() as u32);
    let regions = extract_room_regions(&instance, &program).unwrap();
    assert_eq!(regions[0].bounds, BoundingBox::new(0, 10, 0, 10));
    assert_eq!(regions[1].bounds, BoundingBox::new(0, 10, 12, 20));

    // Front door on the south wall of room 2.
    let plan = PlanGraphBuilder::default()
        .build(&regions, &instance, &[], BoundingBox::new(10, 11, 14, 18))
        .unwrap();
    let a = plan.room_key(1).unwrap();
    let b = plan.room_key(2).unwrap();

    assert_eq!(plan.relation(a, b), Some(Direction::W));
    assert_eq!(plan.room(b).unwrap().related(Direction::W), &[a]);
    assert_eq!(plan.room(a).unwrap().related(Direction::E), &[b]);
}

#[test]
fn containment_records_surround_and_inside() {
    let mut instance = LabelGrid::new(22, 22, 0);
    instance.fill_rect(0, 20, 0, 20, 1);
    instance.fill_rect(5, 10, 5, 10, 2);
    let program = LabelGrid::new(22, 22, Program::Storage.code() as u32);
    let regions = extract_room_regions(&instance, &program).unwrap();
    assert_eq!(regions[0].bounds, BoundingBox::new(0, 20, 0, 20));
    assert_eq!(regions[1].bounds, BoundingBox::new(5, 10, 5, 10));

    let plan = PlanGraphBuilder::default()
        .build(&regions, &instance, &[], BoundingBox::new(20, 21, 14, 18))
        .unwrap();
    let a = plan.room_key(1).unwrap();
    let b = plan.room_key(2).unwrap();

    // A surrounds B; B is inside A.
    assert_eq!(plan.relation(a, b), Some(Direction::O));
    assert_eq!(plan.relation(b, a), Some(Direction::I));
    assert_eq!(plan.room(a).unwrap().related(Direction::I), &[b]);
    assert_eq!(plan.room(b).unwrap().related(Direction::O), &[a]);
}

#[test]
fn malformed_door_rejects_the_whole_plan() {
    let (instance, program, mut doors, front_door) = four_room_plan();
    // A door in the middle of the living room sees only room 1.
    doors.push(BoundingBox::new(8, 10, 8, 12));
    let regions = extract_room_regions(&instance, &program).unwrap();
    let err = PlanGraphBuilder::default()
        .build(&regions, &instance, &doors, front_door)
        .unwrap_err();
    assert_eq!(
        err,
        Error::DoorCardinality {
            door_id: 4,
            bounds: BoundingBox::new(8, 10, 8, 12),
            expected: 2,
            found: vec![1],
        }
    );
    assert!(err.to_string().contains("door 4"));
}
