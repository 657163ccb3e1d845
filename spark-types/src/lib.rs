// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Types describing neighbor-discovery (spark) adjacencies as reported by a
//! routing daemon's admin API.
//!
//! These are shared between the admin client and the administration CLI. The
//! crate only depends on serde so clients can use it without pulling in any
//! transport machinery.

pub mod addr;
pub mod neighbor;

pub use addr::{sprint_addr, BinaryAddress};
pub use neighbor::{NeighborEvent, NeighborRecord, NeighborState};
