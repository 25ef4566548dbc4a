//! Application services — use-case implementations.
//!
//! Each service accepts port implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete stores.

pub mod directory_service;
