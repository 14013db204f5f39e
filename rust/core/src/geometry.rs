// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry primitives: margin-tolerant collision and the two
//! point-relative-to-box classifiers.
//!
//! Comparisons on centroids use exact equality. A centroid that sits on a
//! half pixel can therefore miss the cardinal branches of
//! [`door_room_relation`] and fall through to `None`.

use crate::bounds::{BoundingBox, Point};
use crate::direction::{Direction, DoorDirection};

/// Returns `true` unless the boxes are separated by more than `margin`
/// along either axis. Symmetric in `a` and `b`.
pub fn collides(a: &BoundingBox, b: &BoundingBox, margin: i64) -> bool {
    !(a.y0 - margin > b.y1
        || a.y1 + margin < b.y0
        || a.x0 - margin > b.x1
        || a.x1 + margin < b.x0)
}

/// Classifies `point` against `bounds`.
///
/// ```text
///  NW  N  NE
///     ---
///  W | I | E
///     ---
///  SW  S  SE
/// ```
///
/// Rules are tried in the order of the grid above, first match wins, so
/// every boundary point lands in exactly one region. The top corners
/// resolve to `NW` and `NE`. The bottom-left corner falls to the west band
/// and the bottom-right corner to the south band. Returns `None` only for
/// degenerate boxes.
pub fn point_box_relation(point: Point, bounds: &BoundingBox) -> Option<Direction> {
    let Point { y, x } = point;
    let (y0, y1) = (bounds.y0 as f64, bounds.y1 as f64);
    let (x0, x1) = (bounds.x0 as f64, bounds.x1 as f64);

    if (x < x0 && y <= y0) || (x == x0 && y == y0) {
        Some(Direction::NW)
    } else if x0 <= x && x < x1 && y <= y0 {
        Some(Direction::N)
    } else if (x1 <= x && y < y0) || (x == x1 && y == y0) {
        Some(Direction::NE)
    } else if x <= x0 && y0 < y && y <= y1 {
        Some(Direction::W)
    } else if x0 < x && x < x1 && y0 < y && y < y1 {
        Some(Direction::I)
    } else if x1 <= x && y0 <= y && y < y1 {
        Some(Direction::E)
    } else if (x <= x0 && y1 < y) || (x == x0 && y == y1) {
        Some(Direction::SW)
    } else if x0 < x && x <= x1 && y1 <= y {
        Some(Direction::S)
    } else if (x1 < x && y1 <= y) || (x == x1 && y == y1) {
        Some(Direction::SE)
    } else {
        None
    }
}

/// Classifies the centroid of `door` against the room box `room`.
///
/// A door exactly level with the room's centroid on one axis gets a
/// cardinal label. Otherwise it is bucketed by the room's centroid lines,
/// first on the horizontal walls, then on the vertical walls. Doors outside
/// both the column span and the row span of the room yield `None`.
pub fn door_room_relation(door: &BoundingBox, room: &BoundingBox) -> Option<DoorDirection> {
    let Point { y: yc, x: xc } = room.centroid();
    let Point { y, x } = door.centroid();
    let (y0, y1) = (room.y0 as f64, room.y1 as f64);
    let (x0, x1) = (room.x0 as f64, room.x1 as f64);

    if x == xc && y < yc {
        Some(DoorDirection::N)
    } else if x == xc && y > yc {
        Some(DoorDirection::S)
    } else if y == yc && x < xc {
        Some(DoorDirection::W)
    } else if y == yc && x > xc {
        Some(DoorDirection::E)
    } else if x0 < x && x < xc {
        Some(if y < yc { DoorDirection::NW } else { DoorDirection::SW })
    } else if xc < x && x < x1 {
        Some(if y < yc { DoorDirection::NE } else { DoorDirection::SE })
    } else if y0 < y && y < yc {
        Some(if x < xc { DoorDirection::WN } else { DoorDirection::EN })
    } else if yc < y && y < y1 {
        Some(if x < xc { DoorDirection::WS } else { DoorDirection::ES })
    } else {
        None
    }
}
