//! In-process user store backed by a `Vec`.

use smarthome_domain::error::InventoryError;
use smarthome_domain::id::UserId;
use smarthome_domain::user::UserRef;

use crate::ports::UserStore;

/// Keeps directory entries in memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Vec<UserRef>,
}

impl InMemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&mut self, user: UserRef) -> Result<(), InventoryError> {
        self.users.push(user);
        Ok(())
    }

    fn get(&self, id: UserId) -> Option<&UserRef> {
        self.users.iter().find(|u| u.id == id)
    }

    fn find_by_name(&self, name: &str) -> Option<&UserRef> {
        self.users.iter().find(|u| u.name == name)
    }

    fn list(&self) -> &[UserRef] {
        &self.users
    }

    fn remove(&mut self, id: UserId) -> Result<Option<UserRef>, InventoryError> {
        let removed = self
            .users
            .iter()
            .position(|u| u.id == id)
            .map(|index| self.users.remove(index));
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> UserRef {
        UserRef {
            id: UserId::new(),
            name: name.to_string(),
            role: "Guest".to_string(),
        }
    }

    #[test]
    fn should_keep_insertion_order() {
        let mut store = InMemoryUserStore::new();
        store.insert(entry("b")).unwrap();
        store.insert(entry("a")).unwrap();
        let names: Vec<&str> = store.list().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn should_find_entry_by_id_and_name() {
        let mut store = InMemoryUserStore::new();
        let arden = entry("Arden");
        let id = arden.id;
        store.insert(arden).unwrap();
        assert_eq!(store.get(id).map(|u| u.name.as_str()), Some("Arden"));
        assert_eq!(store.find_by_name("Arden").map(|u| u.id), Some(id));
        assert!(store.find_by_name("arden").is_none());
    }

    #[test]
    fn should_return_none_when_removing_unknown_id() {
        let mut store = InMemoryUserStore::new();
        store.insert(entry("Arden")).unwrap();
        assert!(store.remove(UserId::new()).unwrap().is_none());
        assert_eq!(store.list().len(), 1);
    }
}
