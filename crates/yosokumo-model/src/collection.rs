//! Ordered, string-keyed entity collections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// An entity that carries its own collection key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Entities keyed by their own identifier, iterated in key order.
///
/// At most one entity is stored per key. Keys compare as plain byte strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize",
    deserialize = "V: Deserialize<'de> + Keyed"
))]
#[serde(into = "Vec<V>", from = "Vec<V>")]
pub struct KeyedCollection<V: Keyed + Clone> {
    entries: BTreeMap<String, V>,
}

impl<V: Keyed + Clone> Default for KeyedCollection<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V: Keyed + Clone> KeyedCollection<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `entity` under its key.
    ///
    /// Returns true if the key was not present before. The entity is stored
    /// in both cases.
    pub fn upsert(&mut self, entity: V) -> bool {
        self.upsert_capturing(entity).is_none()
    }

    /// Installs `entity` under its key and returns the entity it replaced.
    pub fn upsert_capturing(&mut self, entity: V) -> Option<V> {
        self.entries.insert(entity.key().to_owned(), entity)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.take(key).is_some()
    }

    pub fn take(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Applies `edit` to the entity stored under `key`, then files it under
    /// its key as it stands after the edit.
    ///
    /// Returns false, without calling `edit`, if nothing is stored under
    /// `key`. An edit that moves the entity onto another stored key replaces
    /// that entity.
    pub fn update<F: FnOnce(&mut V)>(&mut self, key: &str, edit: F) -> bool {
        let Some(mut entity) = self.entries.remove(key) else {
            return false;
        };
        edit(&mut entity);
        self.entries.insert(entity.key().to_owned(), entity);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// `(key, entity)` pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, V> {
        self.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> btree_map::Values<'_, String, V> {
        self.entries.values()
    }
}

impl<'a, V: Keyed + Clone> IntoIterator for &'a KeyedCollection<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = btree_map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Keyed + Clone> FromIterator<V> for KeyedCollection<V> {
    /// Later entities replace earlier ones with the same key.
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<V: Keyed + Clone> Extend<V> for KeyedCollection<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for entity in iter {
            self.upsert(entity);
        }
    }
}

/// Duplicate keys collapse to the last entity with that key. Deserialization
/// goes through this impl, so a JSON list with repeated keys loads without
/// error; the wire decoders reject repeats instead.
impl<V: Keyed + Clone> From<Vec<V>> for KeyedCollection<V> {
    fn from(entities: Vec<V>) -> Self {
        entities.into_iter().collect()
    }
}

impl<V: Keyed + Clone> From<KeyedCollection<V>> for Vec<V> {
    fn from(collection: KeyedCollection<V>) -> Self {
        collection.entries.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        payload: u32,
    }

    impl Entry {
        fn new(id: &str, payload: u32) -> Self {
            Self {
                id: id.to_string(),
                payload,
            }
        }
    }

    impl Keyed for Entry {
        fn key(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn upsert_fresh_and_existing() {
        let mut collection = KeyedCollection::new();
        assert!(collection.upsert(Entry::new("b", 1)));
        assert_eq!(collection.len(), 1);

        assert!(!collection.upsert(Entry::new("b", 2)));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("b").map(|e| e.payload), Some(2));

        let previous = collection.upsert_capturing(Entry::new("b", 3));
        assert_eq!(previous, Some(Entry::new("b", 2)));
        assert_eq!(collection.upsert_capturing(Entry::new("a", 1)), None);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn remove_and_clear() {
        let mut collection: KeyedCollection<Entry> =
            [Entry::new("x", 1), Entry::new("y", 2)].into_iter().collect();
        assert!(collection.contains("x"));
        assert!(collection.remove("x"));
        assert!(!collection.remove("x"));
        assert!(!collection.contains("x"));
        assert_eq!(collection.take("y"), Some(Entry::new("y", 2)));
        collection.upsert(Entry::new("z", 3));
        collection.clear();
        assert!(collection.is_empty());
    }

    #[test]
    fn update_refiles_under_edited_key() {
        let mut collection: KeyedCollection<Entry> =
            [Entry::new("a", 1), Entry::new("b", 2)].into_iter().collect();

        assert!(collection.update("a", |e| e.payload = 10));
        assert_eq!(collection.get("a").map(|e| e.payload), Some(10));

        assert!(collection.update("a", |e| e.id = "c".to_string()));
        assert!(!collection.contains("a"));
        assert_eq!(collection.get("c"), Some(&Entry::new("c", 10)));
        for (key, entry) in &collection {
            assert_eq!(key, &entry.id);
        }

        assert!(collection.update("c", |e| e.id = "b".to_string()));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("b"), Some(&Entry::new("b", 10)));

        let mut called = false;
        assert!(!collection.update("missing", |_| called = true));
        assert!(!called);
    }

    #[test]
    fn duplicate_keys_in_json_keep_the_last() {
        let json = r#"[{"id":"a","payload":1},{"id":"a","payload":2}]"#;
        let collection: KeyedCollection<Entry> = serde_json::from_str(json).expect("deserialize");
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("a").map(|e| e.payload), Some(2));
    }

    #[test]
    fn iteration_follows_key_order() {
        let collection: KeyedCollection<Entry> = ["m", "c", "x", "a"]
            .into_iter()
            .map(|id| Entry::new(id, 0))
            .collect();
        let keys: Vec<&str> = collection.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "c", "m", "x"]);
        let again: Vec<&str> = collection.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, again);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let forward: KeyedCollection<Entry> =
            [Entry::new("a", 1), Entry::new("b", 2)].into_iter().collect();
        let backward: KeyedCollection<Entry> =
            [Entry::new("b", 2), Entry::new("a", 1)].into_iter().collect();
        assert_eq!(forward, backward);

        let different: KeyedCollection<Entry> =
            [Entry::new("a", 1), Entry::new("b", 3)].into_iter().collect();
        assert_ne!(forward, different);
    }

    #[test]
    fn serializes_as_list() {
        let collection: KeyedCollection<Entry> =
            [Entry::new("b", 2), Entry::new("a", 1)].into_iter().collect();
        let json = serde_json::to_string(&collection).expect("serialize collection");
        assert_eq!(json, r#"[{"id":"a","payload":1},{"id":"b","payload":2}]"#);
        let back: KeyedCollection<Entry> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, collection);
    }
}
