// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Colour table of the program channel.

use floorplan_graph_core::Program;

/// RGB colour of each program code in the rendered plans.
pub const PALETTE: [([u8; 3], Program); 18] = [
    ([245, 245, 245], Program::ExternalArea),
    ([50, 50, 50], Program::ExteriorWall),
    ([100, 100, 100], Program::FrontDoor),
    ([150, 150, 150], Program::InteriorWall),
    ([200, 200, 200], Program::InteriorDoor),
    ([255, 69, 69], Program::Kitchen),
    ([255, 165, 0], Program::Bathroom),
    ([255, 255, 0], Program::DiningRoom),
    ([0, 0, 128], Program::MasterRoom),
    ([65, 105, 225], Program::ChildRoom),
    ([0, 0, 205], Program::StudyRoom),
    ([135, 206, 235], Program::SecondRoom),
    ([173, 216, 230], Program::GuestRoom),
    ([0, 128, 0], Program::LivingRoom),
    ([0, 128, 128], Program::Balcony),
    ([128, 0, 128], Program::Entrance),
    ([255, 182, 193], Program::Storage),
    ([139, 69, 19], Program::WallIn),
];

/// Looks up the program drawn in `rgb`.
pub fn program_for(rgb: [u8; 3]) -> Option<Program> {
    PALETTE.iter().find(|(c, _)| *c == rgb).map(|&(_, p)| p)
}

/// Colour used to draw `program`.
pub fn color_for(program: Program) -> [u8; 3] {
    PALETTE[program.code() as usize].0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_indexed_by_code() {
        for (i, (_, p)) in PALETTE.iter().enumerate() {
            assert_eq!(p.code() as usize, i);
        }
    }

    #[test]
    fn lookup_both_ways() {
        assert_eq!(program_for([0, 128, 0]), Some(Program::LivingRoom));
        assert_eq!(program_for([1, 2, 3]), None);
        assert_eq!(color_for(Program::FrontDoor), [100, 100, 100]);
    }
}
