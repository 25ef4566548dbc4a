//! User store port — keyed storage behind the shared user directory.

use smarthome_domain::error::InventoryError;
use smarthome_domain::id::UserId;
use smarthome_domain::user::UserRef;

/// Storage for directory entries, kept in registration order.
pub trait UserStore {
    /// Append an entry. Uniqueness is checked by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot accept the entry.
    fn insert(&mut self, user: UserRef) -> Result<(), InventoryError>;

    /// Look up an entry by id.
    fn get(&self, id: UserId) -> Option<&UserRef>;

    /// Look up an entry by exact name.
    fn find_by_name(&self, name: &str) -> Option<&UserRef>;

    /// All entries in registration order.
    fn list(&self) -> &[UserRef];

    /// Remove and return the entry with `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot complete the removal.
    fn remove(&mut self, id: UserId) -> Result<Option<UserRef>, InventoryError>;
}
