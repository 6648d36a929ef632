// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod checkin;
pub mod flows;
pub mod waterbody;

pub use checkin::CheckinService;
pub use flows::FlowService;
pub use waterbody::WaterbodyService;
