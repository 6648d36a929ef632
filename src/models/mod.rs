// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod checkin;
pub mod event;
pub mod flow;
pub mod launch;
pub mod notification;
mod raw;
pub mod species;
pub mod station;
pub mod waterbody;

pub use checkin::{CheckinRequest, CheckinRow};
pub use event::{Event, Organizer};
pub use flow::{FlowDirection, FlowEdge, MovementRow};
pub use launch::Launch;
pub use notification::Notification;
pub use species::Species;
pub use station::{DeconStation, MobileDeconStation};
pub use waterbody::Waterbody;
