//! User — a named person with a role, plus the [`Admin`] and [`Guest`] kinds.

mod admin;
mod guest;

use serde::{Deserialize, Serialize};

use crate::counters::InventoryCounters;
use crate::error::{Validate, ValidationError, check_name};
use crate::id::UserId;

pub use admin::Admin;
pub use guest::Guest;

/// Conventional role names. Roles are free-form; these are just the usual ones.
pub mod roles {
    pub const ADMIN: &str = "Admin";
    pub const GUEST: &str = "Guest";
    pub const MANAGER: &str = "Manager";
}

/// Another user as recorded in a user's own registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: UserId,
    pub name: String,
    pub role: String,
}

/// A user of the system.
///
/// Each user keeps its own list of users it has been told about; the lists
/// of two users are unrelated.
#[derive(Debug, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: String,
    registered: Vec<UserRef>,
}

impl User {
    /// Create a user and count it against `counters`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        counters: &InventoryCounters,
    ) -> Self {
        counters.record_user();
        Self {
            id: UserId::new(),
            name: name.into(),
            role: role.into(),
            registered: Vec::new(),
        }
    }

    #[must_use]
    pub fn display_info(&self) -> String {
        format!("Name: {} | Role: {}", self.name, self.role)
    }

    /// Record `user` in this user's registry. Counters are not touched.
    pub fn add_user<U: AsRef<User> + ?Sized>(&mut self, user: &U) {
        self.registered.push(user.as_ref().to_ref());
    }

    #[must_use]
    pub fn registered_users(&self) -> &[UserRef] {
        &self.registered
    }

    #[must_use]
    pub fn to_ref(&self) -> UserRef {
        UserRef {
            id: self.id,
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

impl AsRef<User> for User {
    fn as_ref(&self) -> &User {
        self
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_name_and_role() {
        let counters = InventoryCounters::new();
        let user = User::new("System", roles::MANAGER, &counters);
        assert_eq!(user.display_info(), "Name: System | Role: Manager");
    }

    #[test]
    fn should_count_every_constructed_user() {
        let counters = InventoryCounters::new();
        let users: Vec<User> = (0..5)
            .map(|i| User::new(format!("user{i}"), roles::GUEST, &counters))
            .collect();
        assert_eq!(users.len(), 5);
        assert_eq!(counters.user_count(), 5);
    }

    #[test]
    fn should_not_count_again_when_added_to_registry() {
        let counters = InventoryCounters::new();
        let mut system = User::new("System", roles::MANAGER, &counters);
        let other = User::new("Arden", roles::GUEST, &counters);
        system.add_user(&other);
        system.add_user(&other);
        assert_eq!(counters.user_count(), 2);
        assert_eq!(system.registered_users().len(), 2);
    }

    #[test]
    fn should_keep_registries_separate_per_user() {
        let counters = InventoryCounters::new();
        let mut a = User::new("A", roles::MANAGER, &counters);
        let b = User::new("B", roles::MANAGER, &counters);
        let c = User::new("C", roles::GUEST, &counters);
        a.add_user(&c);
        assert_eq!(a.registered_users()[0].name, "C");
        assert!(b.registered_users().is_empty());
    }

    #[test]
    fn should_accept_free_form_role() {
        let counters = InventoryCounters::new();
        let user = User::new("Pat", "Plumber", &counters);
        assert_eq!(user.display_info(), "Name: Pat | Role: Plumber");
    }

    #[test]
    fn should_reject_empty_name_when_validated() {
        let counters = InventoryCounters::new();
        let user = User::new("", roles::GUEST, &counters);
        assert_eq!(user.validate(), Err(ValidationError::EmptyName));
    }
}
