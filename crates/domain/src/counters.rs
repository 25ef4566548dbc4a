//! Inventory counters — how many users, rooms and device placements exist.
//!
//! The counts are shared through a cloneable handle instead of statics.
//! Every [`User`](crate::user::User) and [`Room`](crate::room::Room) is
//! constructed against a handle and reports to it; two handles created
//! independently never see each other's counts.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

#[derive(Debug, Default)]
struct Counts {
    users: AtomicUsize,
    rooms: AtomicUsize,
    devices: AtomicUsize,
}

/// Shared handle to the user, room and device counters.
///
/// Cloning shares the underlying counts.
#[derive(Debug, Clone, Default)]
pub struct InventoryCounters {
    inner: Arc<Counts>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CounterSnapshot {
    pub user_count: usize,
    pub total_rooms: usize,
    pub total_devices: usize,
}

impl InventoryCounters {
    /// Create a handle with every count at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users ever constructed. Never decreases.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.inner.users.load(Ordering::Relaxed)
    }

    /// Number of rooms ever constructed, admin rooms included.
    #[must_use]
    pub fn total_rooms(&self) -> usize {
        self.inner.rooms.load(Ordering::Relaxed)
    }

    /// Number of device placements across all rooms.
    #[must_use]
    pub fn total_devices(&self) -> usize {
        self.inner.devices.load(Ordering::Relaxed)
    }

    /// Copy all three counts at once.
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            user_count: self.user_count(),
            total_rooms: self.total_rooms(),
            total_devices: self.total_devices(),
        }
    }

    pub(crate) fn record_user(&self) {
        self.inner.users.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_room(&self) {
        self.inner.rooms.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_device_added(&self) {
        self.inner.devices.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_device_removed(&self) {
        // the closure never returns None, so the update always applies
        let _ = self
            .inner
            .devices
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                Some(n.saturating_sub(1))
            });
    }
}
