// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Direction vocabularies for room-room and door-room relations.

use serde::{Deserialize, Serialize};

/// Relative position of one room with respect to another.
///
/// The eight compass labels partition the plane around a box; `I` means
/// inside and `O` means surrounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    I,
    O,
}

impl Direction {
    pub const ALL: [Direction; 10] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
        Direction::I,
        Direction::O,
    ];

    /// The reciprocal direction. Applying it twice returns the original.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::I => Direction::O,
            Direction::O => Direction::I,
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
            Direction::I => "I",
            Direction::O => "O",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a door's centroid relative to a room.
///
/// `NW`/`NE`/`SW`/`SE` bucket a door on the top or bottom wall by which
/// half of the wall it sits in. `WN`/`WS`/`EN`/`ES` do the same for the
/// left and right walls.
///
/// ```text
///     NW N NE
///     -------
///  WN|       | EN
///  W |       | E
///  WS|       | ES
///     -------
///     SW S SE
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorDirection {
    N,
    S,
    E,
    W,
    NW,
    NE,
    SW,
    SE,
    WN,
    EN,
    WS,
    ES,
}

impl DoorDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoorDirection::N => "N",
            DoorDirection::S => "S",
            DoorDirection::E => "E",
            DoorDirection::W => "W",
            DoorDirection::NW => "NW",
            DoorDirection::NE => "NE",
            DoorDirection::SW => "SW",
            DoorDirection::SE => "SE",
            DoorDirection::WN => "WN",
            DoorDirection::EN => "EN",
            DoorDirection::WS => "WS",
            DoorDirection::ES => "ES",
        }
    }
}

impl std::fmt::Display for DoorDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn containment_pairs_with_surrounding() {
        assert_eq!(Direction::I.opposite(), Direction::O);
        assert_eq!(Direction::NE.opposite(), Direction::SW);
        assert_eq!(Direction::NW.opposite(), Direction::SE);
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&Direction::SW).unwrap(), "\"SW\"");
        assert_eq!(serde_json::to_string(&DoorDirection::EN).unwrap(), "\"EN\"");
        assert_eq!(Direction::NE.to_string(), "NE");
    }
}
