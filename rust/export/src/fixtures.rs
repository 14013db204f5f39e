// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Small plan shared by the exporter tests.

use floorplan_graph_core::{BoundingBox, LabelGrid, PlanGraph, PlanGraphBuilder, Program, RoomRegion};

/// Kitchen (1) west of a living room (2), one door between them, front door
/// on the living room's north wall.
pub(crate) fn two_room_plan() -> PlanGraph {
    let mut instance = LabelGrid::new(12, 24, 0);
    instance.fill_rect(1, 11, 1, 11, 1);
    instance.fill_rect(1, 11, 13, 23, 2);
    let rooms = vec![
        RoomRegion {
            id: 1,
            bounds: BoundingBox::new(1, 11, 1, 11),
            program: Program::Kitchen,
        },
        RoomRegion {
            id: 2,
            bounds: BoundingBox::new(1, 11, 13, 23),
            program: Program::LivingRoom,
        },
    ];
    PlanGraphBuilder::default()
        .build(
            &rooms,
            &instance,
            &[BoundingBox::new(4, 8, 11, 12)],
            BoundingBox::new(0, 1, 16, 20),
        )
        .expect("fixture plan is well formed")
}

/// One bathroom whose front door straddles its north-west corner, so the
/// door has no position relative to the room.
pub(crate) fn corner_entrance_plan() -> PlanGraph {
    let mut instance = LabelGrid::new(14, 14, 0);
    instance.fill_rect(2, 12, 2, 12, 1);
    let rooms = vec![RoomRegion {
        id: 1,
        bounds: BoundingBox::new(2, 12, 2, 12),
        program: Program::Bathroom,
    }];
    PlanGraphBuilder::default()
        .build(&rooms, &instance, &[], BoundingBox::new(0, 2, 0, 4))
        .expect("fixture plan is well formed")
}
