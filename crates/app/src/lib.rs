//! # smarthome-app
//!
//! Application layer — the inventory context, use-case services and
//! **port definitions** (traits).
//!
//! ## Responsibilities
//! - Own the counters through an explicit [`inventory::Inventory`] context
//!   and construct users, guests, admins and rooms against it
//! - Apply the validation policy (lenient by default, strict on request)
//! - Define **port traits** that stores must implement (`UserStore`)
//! - Provide **in-process infrastructure** that needs no IO
//!   ([`memory_store::InMemoryUserStore`])
//! - Offer the shared [`services::directory_service::DirectoryService`]
//! - Script the [`showcase`] walkthrough printed by the binary
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only. Never prints; the binary decides
//! where output goes.

pub mod inventory;
pub mod memory_store;
pub mod ports;
pub mod services;
pub mod showcase;
