//! Guest — a user with nothing beyond the basics.

use serde::Serialize;

use super::User;
use crate::counters::InventoryCounters;

/// A visiting user.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Guest(User);

impl Guest {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        counters: &InventoryCounters,
    ) -> Self {
        Self(User::new(name, role, counters))
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.0
    }

    #[must_use]
    pub fn display_info(&self) -> String {
        self.0.display_info()
    }

    #[must_use]
    pub fn into_user(self) -> User {
        self.0
    }
}

impl AsRef<User> for Guest {
    fn as_ref(&self) -> &User {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::roles;

    #[test]
    fn should_display_like_a_user() {
        let counters = InventoryCounters::new();
        let guest = Guest::new("Arden", roles::GUEST, &counters);
        assert_eq!(guest.display_info(), "Name: Arden | Role: Guest");
        assert_eq!(counters.user_count(), 1);
    }

    #[test]
    fn should_keep_identity_when_unwrapped() {
        let counters = InventoryCounters::new();
        let guest = Guest::new("Arden", roles::GUEST, &counters);
        let id = guest.user().id;
        assert_eq!(guest.into_user().id, id);
        assert_eq!(counters.user_count(), 1);
    }
}
