//! Client-side favorites: an insertion-ordered, duplicate-free set of
//! product ids, loaded from storage when the store is first read and
//! re-persisted in full on every mutation.

use yewdux::Store;

use crate::storage;

/// The set itself, kept separate from the storage glue so it stays
/// host-testable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FavoriteList {
    items: Vec<String>,
}

impl FavoriteList {
    /// Build a list from persisted ids, dropping duplicates while
    /// keeping first-insertion order.
    pub fn from_items(items: Vec<String>) -> Self {
        let mut list = Self::default();
        for id in items {
            if !list.contains(&id) {
                list.items.push(id);
            }
        }
        list
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) {
        if let Some(index) = self.items.iter().position(|item| item == id) {
            self.items.remove(index);
        } else {
            self.items.push(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item == id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// Yewdux store wrapping the list with persistence side effects.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Favorites {
    list: FavoriteList,
}

impl Store for Favorites {
    fn new(_cx: &yewdux::Context) -> Self {
        Self { list: load() }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

impl Favorites {
    /// Toggle and synchronously re-persist the full set.
    pub fn toggle(&mut self, id: &str) {
        self.list.toggle(id);
        self.persist();
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.list.contains(id)
    }

    /// Empty the set and persist the empty state.
    pub fn clear(&mut self) {
        self.list.clear();
        self.persist();
    }

    pub fn count(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        self.list.items()
    }

    fn persist(&self) {
        match serde_json::to_string(&self.list.items) {
            Ok(serialized) => {
                storage::set(storage::FAVORITES_KEY, &serialized, storage::StorageTier::Durable);
            }
            Err(err) => log::debug!("favorites not persisted: {err}"),
        }
    }
}

fn load() -> FavoriteList {
    let Some(raw) = storage::get(storage::FAVORITES_KEY) else {
        return FavoriteList::default();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(items) => FavoriteList::from_items(items),
        Err(err) => {
            log::debug!("stored favorites unreadable, starting empty: {err}");
            FavoriteList::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut list = FavoriteList::default();
        list.toggle("p1");
        assert!(list.contains("p1"));
        list.toggle("p1");
        assert!(!list.contains("p1"));
        assert!(list.is_empty());
    }

    /// Toggling twice restores both the set and its persisted
    /// representation.
    #[test]
    fn double_toggle_is_identity() {
        let mut list = FavoriteList::from_items(vec!["a".into(), "b".into()]);
        let before = serde_json::to_string(&list.items).unwrap();
        list.toggle("c");
        list.toggle("c");
        let after = serde_json::to_string(&list.items).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut list = FavoriteList::default();
        list.toggle("b");
        list.toggle("a");
        list.toggle("c");
        assert_eq!(list.items(), ["b", "a", "c"]);
        list.toggle("a");
        assert_eq!(list.items(), ["b", "c"]);
    }

    #[test]
    fn from_items_drops_duplicates() {
        let list = FavoriteList::from_items(vec!["x".into(), "y".into(), "x".into()]);
        assert_eq!(list.items(), ["x", "y"]);
        assert_eq!(list.len(), 2);
    }

    /// A fresh list rebuilt from the persisted representation reports
    /// the same membership.
    #[test]
    fn persisted_roundtrip_keeps_membership() {
        let mut list = FavoriteList::default();
        list.toggle("p7");
        let persisted = serde_json::to_string(&list.items).unwrap();
        let restored =
            FavoriteList::from_items(serde_json::from_str::<Vec<String>>(&persisted).unwrap());
        assert!(restored.contains("p7"));
        assert_eq!(restored.items(), list.items());
    }

    #[test]
    fn clear_empties_the_set() {
        let mut list = FavoriteList::from_items(vec!["a".into(), "b".into()]);
        list.clear();
        assert!(list.is_empty());
    }
}
