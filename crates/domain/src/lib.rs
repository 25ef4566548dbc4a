//! # smarthome-domain
//!
//! Pure domain model for the smarthome inventory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, counters
//! - Define **Devices** (plain, energy-rated, smart lights, thermostats)
//! - Define **Rooms** (ordered device lists)
//! - Define **Users** (plain users, guests, and admins that own a room)
//! - Produce the human-readable status lines for every operation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Process-wide counts live in an explicit [`counters::InventoryCounters`]
//! handle rather than in statics, so every caller decides their scope.

pub mod counters;
pub mod error;
pub mod id;

pub mod device;
pub mod room;
pub mod user;
