//! Directory service — one shared registry of users.
//!
//! Unlike the per-user registry on [`User`], the directory is a single list
//! that rejects duplicates and reports missing entries. Registering a user
//! here never changes the user count; that counts construction only.

use smarthome_domain::error::{DuplicateError, InventoryError, NotFoundError};
use smarthome_domain::id::UserId;
use smarthome_domain::user::{User, UserRef};

use crate::ports::UserStore;

/// Application service for the shared user directory.
pub struct DirectoryService<S> {
    store: S,
}

impl<S: UserStore> DirectoryService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a user to the directory.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Duplicate`] when the same user, or another
    /// user with the same name, is already registered, or a store error.
    #[tracing::instrument(skip(self, user), fields(user_name = %user.as_ref().name))]
    pub fn register<U: AsRef<User> + ?Sized>(
        &mut self,
        user: &U,
    ) -> Result<UserRef, InventoryError> {
        let entry = user.as_ref().to_ref();
        if self.store.get(entry.id).is_some() {
            return Err(DuplicateError {
                entity: "User",
                key: entry.id.to_string(),
            }
            .into());
        }
        if self.store.find_by_name(&entry.name).is_some() {
            return Err(DuplicateError {
                entity: "User",
                key: entry.name,
            }
            .into());
        }
        self.store.insert(entry.clone())?;
        tracing::debug!(members = self.store.list().len(), "user registered");
        Ok(entry)
    }

    /// Look up a registered user by id.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no user with `id` is registered.
    pub fn get(&self, id: UserId) -> Result<&UserRef, InventoryError> {
        self.store.get(id).ok_or_else(|| {
            NotFoundError {
                entity: "User",
                key: id.to_string(),
            }
            .into()
        })
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&UserRef> {
        self.store.find_by_name(name)
    }

    /// Remove a user from the directory.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no user with `id` is
    /// registered, or a store error.
    #[tracing::instrument(skip(self))]
    pub fn unregister(&mut self, id: UserId) -> Result<UserRef, InventoryError> {
        self.store.remove(id)?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                key: id.to_string(),
            }
            .into()
        })
    }

    /// All registered users in registration order.
    #[must_use]
    pub fn list(&self) -> &[UserRef] {
        self.store.list()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.list().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.list().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_store::InMemoryUserStore;
    use smarthome_domain::counters::InventoryCounters;
    use smarthome_domain::user::{Admin, Guest, roles};

    fn make_service() -> DirectoryService<InMemoryUserStore> {
        DirectoryService::new(InMemoryUserStore::new())
    }

    #[test]
    fn should_register_users_of_every_kind() {
        let counters = InventoryCounters::new();
        let admin = Admin::new("Nazir", roles::ADMIN, "Living Room", &counters);
        let guest = Guest::new("Arden", roles::GUEST, &counters);
        let system = User::new("System", roles::MANAGER, &counters);

        let mut svc = make_service();
        svc.register(&admin).unwrap();
        svc.register(&guest).unwrap();
        svc.register(&system).unwrap();

        assert_eq!(svc.len(), 3);
        assert_eq!(svc.list()[0].name, "Nazir");
        assert_eq!(svc.list()[2].role, "Manager");
    }

    #[test]
    fn should_reject_same_user_twice() {
        let counters = InventoryCounters::new();
        let guest = Guest::new("Arden", roles::GUEST, &counters);
        let mut svc = make_service();
        svc.register(&guest).unwrap();

        let result = svc.register(&guest);
        assert!(matches!(result, Err(InventoryError::Duplicate(_))));
        assert_eq!(svc.len(), 1);
    }

    #[test]
    fn should_reject_different_user_with_same_name() {
        let counters = InventoryCounters::new();
        let first = User::new("Arden", roles::GUEST, &counters);
        let second = User::new("Arden", roles::MANAGER, &counters);
        let mut svc = make_service();
        svc.register(&first).unwrap();

        let InventoryError::Duplicate(dup) = svc.register(&second).unwrap_err() else {
            panic!("expected duplicate error");
        };
        assert_eq!(dup.key, "Arden");
    }

    #[test]
    fn should_not_change_user_count_when_registering() {
        let counters = InventoryCounters::new();
        let guest = Guest::new("Arden", roles::GUEST, &counters);
        let mut svc = make_service();
        svc.register(&guest).unwrap();
        svc.unregister(guest.user().id).unwrap();
        assert_eq!(counters.user_count(), 1);
    }

    #[test]
    fn should_return_not_found_when_user_missing() {
        let svc = make_service();
        let result = svc.get(UserId::new());
        assert!(matches!(result, Err(InventoryError::NotFound(_))));
    }

    #[test]
    fn should_return_not_found_when_unregistering_missing_user() {
        let mut svc = make_service();
        let result = svc.unregister(UserId::new());
        assert!(matches!(result, Err(InventoryError::NotFound(_))));
    }

    #[test]
    fn should_find_registered_user_by_name() {
        let counters = InventoryCounters::new();
        let user = User::new("System", roles::MANAGER, &counters);
        let mut svc = make_service();
        svc.register(&user).unwrap();

        assert_eq!(svc.find_by_name("System").map(|u| u.id), Some(user.id));
        assert_eq!(svc.get(user.id).unwrap().name, "System");
        assert!(svc.find_by_name("Nobody").is_none());
    }

    #[test]
    fn should_allow_reregistering_after_unregister() {
        let counters = InventoryCounters::new();
        let user = User::new("System", roles::MANAGER, &counters);
        let mut svc = make_service();
        svc.register(&user).unwrap();
        let removed = svc.unregister(user.id).unwrap();
        assert_eq!(removed.id, user.id);
        assert!(svc.is_empty());
        svc.register(&user).unwrap();
        assert_eq!(svc.len(), 1);
    }
}
