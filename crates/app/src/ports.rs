//! Port definitions — traits that stores implement.
//!
//! The directory service depends on these traits only, so a store can be
//! swapped without touching the use-case code.

pub mod user_store;

pub use user_store::UserStore;
