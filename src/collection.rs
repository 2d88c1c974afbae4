//! # Named Entity Collections
//!
//! A small insertion-ordered map used by every owner type (provider, group,
//! repository) to hold its named children. Owners hold a collection as a
//! field and delegate to it; the shared behavior lives here instead of in a
//! common ancestor.
//!
//! Keys are normalized on insert and lookup according to the collection's
//! case-sensitivity policy, so `Repo` and `repo` address the same entry in a
//! case-insensitive namespace. Iteration always yields entries in insertion
//! order; replacing an entry keeps its original position.

use crate::pattern::Matcher;

/// An entity addressable by name inside a collection.
pub trait Named {
    /// The display name, as supplied at construction (not normalized).
    fn name(&self) -> &str;
}

/// Insertion-ordered map of named entities keyed by normalized name.
#[derive(Debug, Clone)]
pub struct EntityCollection<T> {
    case_sensitive: bool,
    entries: Vec<(String, T)>,
}

impl<T: Named> EntityCollection<T> {
    /// Creates an empty collection with the given case-sensitivity policy.
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            entries: Vec::new(),
        }
    }

    /// Whether name lookups in this collection are case-sensitive.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn key(&self, name: &str) -> String {
        if self.case_sensitive {
            name.to_string()
        } else {
            name.to_lowercase()
        }
    }

    /// Inserts an entity under its own (normalized) name.
    ///
    /// Replacing an existing entry keeps its insertion position and returns
    /// the displaced entity.
    pub fn insert(&mut self, entity: T) -> Option<T> {
        let key = self.key(entity.name());
        for entry in &mut self.entries {
            if entry.0 == key {
                return Some(std::mem::replace(&mut entry.1, entity));
            }
        }
        self.entries.push((key, entity));
        None
    }

    /// Looks up an entity by name under the collection's case policy.
    pub fn get(&self, name: &str) -> Option<&T> {
        let key = self.key(name);
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, entity)| entity)
    }

    /// Mutable lookup, same key policy as [`get`](Self::get).
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        let key = self.key(name);
        self.entries
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, entity)| entity)
    }

    /// Whether an entity with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, entity)| entity)
    }

    /// Lazily yields the entities whose display name satisfies `matcher`,
    /// in insertion order.
    pub fn matching<'a>(&'a self, matcher: &'a Matcher) -> impl Iterator<Item = &'a T> + 'a {
        self.iter().filter(|entity| matcher.is_match(entity.name()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: String,
        value: u32,
    }

    impl Item {
        fn new(name: &str, value: u32) -> Self {
            Self {
                name: name.to_string(),
                value,
            }
        }
    }

    impl Named for Item {
        fn name(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut collection = EntityCollection::new(true);
        collection.insert(Item::new("zeta", 1));
        collection.insert(Item::new("alpha", 2));
        collection.insert(Item::new("mid", 3));

        let names: Vec<_> = collection.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mut collection = EntityCollection::new(false);
        collection.insert(Item::new("Sync-Test", 1));

        assert!(collection.contains("sync-test"));
        assert!(collection.contains("SYNC-TEST"));
        assert_eq!(collection.get("sync-test").unwrap().value, 1);
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let mut collection = EntityCollection::new(true);
        collection.insert(Item::new("Sync-Test", 1));

        assert!(collection.contains("Sync-Test"));
        assert!(!collection.contains("sync-test"));
    }

    #[test]
    fn test_replace_keeps_position_and_returns_old() {
        let mut collection = EntityCollection::new(false);
        collection.insert(Item::new("a", 1));
        collection.insert(Item::new("b", 2));

        let displaced = collection.insert(Item::new("A", 3));
        assert_eq!(displaced.unwrap().value, 1);
        assert_eq!(collection.len(), 2);

        let values: Vec<_> = collection.iter().map(|i| i.value).collect();
        assert_eq!(values, vec![3, 2]);
    }

    #[test]
    fn test_matching_filters_lazily_in_order() {
        let mut collection = EntityCollection::new(true);
        collection.insert(Item::new("lib-b", 1));
        collection.insert(Item::new("app", 2));
        collection.insert(Item::new("lib-a", 3));

        let matcher = Matcher::compile(["lib-*"], true).unwrap();
        let names: Vec<_> = collection.matching(&matcher).map(|i| i.name()).collect();
        assert_eq!(names, vec!["lib-b", "lib-a"]);
    }

    #[test]
    fn test_empty_collection() {
        let collection: EntityCollection<Item> = EntityCollection::new(true);
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert!(collection.get("anything").is_none());
    }
}
