//! Inventory context — the explicit home of the user, room and device counts.
//!
//! Everything that is counted (users, guests, admins, rooms) is built
//! through an [`Inventory`], which also decides what happens to entities
//! that fail validation.

use smarthome_domain::counters::{CounterSnapshot, InventoryCounters};
use smarthome_domain::error::{InventoryError, Validate, ValidationError, check_name};
use smarthome_domain::room::Room;
use smarthome_domain::user::{Admin, Guest, User};

/// What to do with an entity that fails its invariant checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Accept it and log a warning.
    #[default]
    Lenient,
    /// Reject it with [`InventoryError::Validation`].
    Strict,
}

/// Owns one set of counters and builds counted entities against it.
#[derive(Debug, Default)]
pub struct Inventory {
    counters: InventoryCounters,
    policy: ValidationPolicy,
}

impl Inventory {
    #[must_use]
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            counters: InventoryCounters::new(),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    #[must_use]
    pub fn counters(&self) -> &InventoryCounters {
        &self.counters
    }

    /// Build and count a user.
    ///
    /// # Errors
    ///
    /// Under [`ValidationPolicy::Strict`], returns
    /// [`InventoryError::Validation`] for an empty name; nothing is counted.
    #[tracing::instrument(skip(self))]
    pub fn create_user(&self, name: &str, role: &str) -> Result<User, InventoryError> {
        self.apply_policy("user", check_name(name))?;
        let user = User::new(name, role, &self.counters);
        tracing::debug!(user_count = self.counters.user_count(), "user created");
        Ok(user)
    }

    /// Build and count a guest.
    ///
    /// # Errors
    ///
    /// Same as [`create_user`](Self::create_user).
    #[tracing::instrument(skip(self))]
    pub fn create_guest(&self, name: &str, role: &str) -> Result<Guest, InventoryError> {
        self.apply_policy("guest", check_name(name))?;
        let guest = Guest::new(name, role, &self.counters);
        tracing::debug!(user_count = self.counters.user_count(), "guest created");
        Ok(guest)
    }

    /// Build an admin, counting one user and one room.
    ///
    /// # Errors
    ///
    /// Under [`ValidationPolicy::Strict`], returns
    /// [`InventoryError::Validation`] when either name is empty; nothing is
    /// counted.
    #[tracing::instrument(skip(self))]
    pub fn create_admin(
        &self,
        name: &str,
        role: &str,
        room_name: &str,
    ) -> Result<Admin, InventoryError> {
        self.apply_policy("admin", check_name(name).and_then(|()| check_name(room_name)))?;
        let admin = Admin::new(name, role, room_name, &self.counters);
        tracing::debug!(
            user_count = self.counters.user_count(),
            total_rooms = self.counters.total_rooms(),
            "admin created"
        );
        Ok(admin)
    }

    /// Build and count a room.
    ///
    /// # Errors
    ///
    /// Under [`ValidationPolicy::Strict`], returns
    /// [`InventoryError::Validation`] for an empty name; nothing is counted.
    #[tracing::instrument(skip(self))]
    pub fn create_room(&self, name: &str) -> Result<Room, InventoryError> {
        self.apply_policy("room", check_name(name))?;
        let room = Room::new(name, &self.counters);
        tracing::debug!(total_rooms = self.counters.total_rooms(), "room created");
        Ok(room)
    }

    /// Run `item`'s invariant checks under the current policy.
    ///
    /// # Errors
    ///
    /// Under [`ValidationPolicy::Strict`], returns
    /// [`InventoryError::Validation`] when the checks fail.
    pub fn admit<T: Validate + ?Sized>(
        &self,
        kind: &'static str,
        item: &T,
    ) -> Result<(), InventoryError> {
        self.apply_policy(kind, item.validate())
    }

    fn apply_policy(
        &self,
        kind: &'static str,
        checked: Result<(), ValidationError>,
    ) -> Result<(), InventoryError> {
        match (checked, self.policy) {
            (Ok(()), _) => Ok(()),
            (Err(err), ValidationPolicy::Strict) => Err(err.into()),
            (Err(err), ValidationPolicy::Lenient) => {
                tracing::warn!(kind, error = %err, "accepting entity that fails validation");
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.counters.user_count()
    }

    #[must_use]
    pub fn total_rooms(&self) -> usize {
        self.counters.total_rooms()
    }

    #[must_use]
    pub fn total_devices(&self) -> usize {
        self.counters.total_devices()
    }

    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }

    #[must_use]
    pub fn users_message(&self) -> String {
        format!(
            "There are {} users currently assigned.",
            self.counters.user_count()
        )
    }

    #[must_use]
    pub fn get_total_rooms(&self) -> String {
        Room::get_total_rooms(&self.counters)
    }

    #[must_use]
    pub fn accommodate_rooms(&self) -> &'static str {
        Room::accommodate_rooms(&self.counters)
    }
}
