// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Program (category) labels assigned to plan pixels and rooms.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Functional category of a pixel or room, by its segmentation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Program {
    ExternalArea = 0,
    ExteriorWall = 1,
    FrontDoor = 2,
    InteriorWall = 3,
    InteriorDoor = 4,
    Kitchen = 5,
    Bathroom = 6,
    DiningRoom = 7,
    MasterRoom = 8,
    ChildRoom = 9,
    StudyRoom = 10,
    SecondRoom = 11,
    GuestRoom = 12,
    LivingRoom = 13,
    Balcony = 14,
    Entrance = 15,
    Storage = 16,
    WallIn = 17,
}

/// Broader grouping of programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    External,
    ExteriorWall,
    FrontDoor,
    InteriorWall,
    InteriorDoor,
    FunctionArea,
    Bedroom,
    PublicArea,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::External => "External",
            RoomType::ExteriorWall => "Exterior Wall",
            RoomType::FrontDoor => "Front Door",
            RoomType::InteriorWall => "Interior Wall",
            RoomType::InteriorDoor => "Interior Door",
            RoomType::FunctionArea => "Function Area",
            RoomType::Bedroom => "Bedroom",
            RoomType::PublicArea => "Public Area",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category name and broader type, indexed by program code.
const DESCRIPTIONS: [(&str, RoomType); 18] = [
    ("External Area", RoomType::External),
    ("Exterior Wall", RoomType::ExteriorWall),
    ("Front Door", RoomType::FrontDoor),
    ("Interior Wall", RoomType::InteriorWall),
    ("Interior Door", RoomType::InteriorDoor),
    ("Kitchen", RoomType::FunctionArea),
    ("Bathroom", RoomType::FunctionArea),
    ("Dining Room", RoomType::FunctionArea),
    ("Master Room", RoomType::Bedroom),
    ("Child Room", RoomType::Bedroom),
    ("Study Room", RoomType::Bedroom),
    ("Second Room", RoomType::Bedroom),
    ("Guest Room", RoomType::Bedroom),
    ("Living Room", RoomType::PublicArea),
    ("Balcony", RoomType::PublicArea),
    ("Entrance", RoomType::PublicArea),
    ("Storage", RoomType::PublicArea),
    ("Wall-in", RoomType::PublicArea),
];

const ALL: [Program; 18] = [
    Program::ExternalArea,
    Program::ExteriorWall,
    Program::FrontDoor,
    Program::InteriorWall,
    Program::InteriorDoor,
    Program::Kitchen,
    Program::Bathroom,
    Program::DiningRoom,
    Program::MasterRoom,
    Program::ChildRoom,
    Program::StudyRoom,
    Program::SecondRoom,
    Program::GuestRoom,
    Program::LivingRoom,
    Program::Balcony,
    Program::Entrance,
    Program::Storage,
    Program::WallIn,
];

impl Program {
    /// Looks up a segmentation code.
    pub fn from_code(code: u32) -> Option<Program> {
        ALL.get(usize::try_from(code).ok()?).copied()
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable category, e.g. `"Master Room"`.
    pub fn category(self) -> &'static str {
        DESCRIPTIONS[self as usize].0
    }

    pub fn room_type(self) -> RoomType {
        DESCRIPTIONS[self as usize].1
    }
}

impl TryFrom<u32> for Program {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Program::from_code(code).ok_or(Error::UnknownProgram(code))
    }
}

impl TryFrom<u8> for Program {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Program::try_from(u32::from(code))
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category())
    }
}
