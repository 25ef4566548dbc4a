//! Admin — a user who also owns a room.

use serde::Serialize;

use super::User;
use crate::counters::InventoryCounters;
use crate::device::Appliance;
use crate::room::Room;

/// A user identity paired with the room it manages.
///
/// Building an admin counts one user and one room.
#[derive(Debug, Serialize)]
pub struct Admin {
    user: User,
    room: Room,
}

impl Admin {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        room_name: impl Into<String>,
        counters: &InventoryCounters,
    ) -> Self {
        Self {
            user: User::new(name, role, counters),
            room: Room::new(room_name, counters),
        }
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn room_mut(&mut self) -> &mut Room {
        &mut self.room
    }

    #[must_use]
    pub fn display_info(&self) -> String {
        self.user.display_info()
    }

    pub fn add_user<U: AsRef<User> + ?Sized>(&mut self, user: &U) {
        self.user.add_user(user);
    }

    pub fn add_device<A: Appliance + ?Sized>(&mut self, device: &A) {
        self.room.add_device(device);
    }

    pub fn remove_device<A: Appliance + ?Sized>(&mut self, device: &A) -> bool {
        self.room.remove_device(device)
    }

    #[must_use]
    pub fn display_devices(&self) -> String {
        self.room.display_devices()
    }
}

impl AsRef<User> for Admin {
    fn as_ref(&self) -> &User {
        &self.user
    }
}

impl AsRef<Room> for Admin {
    fn as_ref(&self) -> &Room {
        &self.room
    }
}
