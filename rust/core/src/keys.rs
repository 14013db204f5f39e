// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena keys for rooms and doors.
//!
//! Relations between entities are stored as these keys rather than as
//! references, so rooms and doors can point at each other freely.

use slotmap::new_key_type;

new_key_type! {
    /// Key for a room in a [`PlanGraph`](crate::PlanGraph).
    pub struct RoomKey;

    /// Key for a door in a [`PlanGraph`](crate::PlanGraph).
    pub struct DoorKey;
}
