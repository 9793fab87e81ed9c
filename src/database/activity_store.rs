use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Serialize, Serializer};

use crate::database::seed;
use crate::models::{Activity, ActivityName};

#[derive(Debug, Default)]
struct Directory {
    // Listing order, fixed at construction.
    order: Vec<ActivityName>,
    by_name: HashMap<ActivityName, Activity>,
}

/// Shared handle to the in-memory activity directory.
///
/// Cloning is cheap; every clone sees the same directory. All reads and writes
/// go through one lock, so a caller mutating an activity via
/// [`ActivityStore::with_activity_mut`] observes and changes it atomically.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<Directory>>,
}

impl ActivityStore {
    /// Builds a store from `(name, activity)` pairs, keeping their order.
    /// A repeated name replaces the earlier record but keeps its position.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ActivityName, Activity)>,
    {
        let mut directory = Directory::default();
        for (name, activity) in entries {
            if directory.by_name.insert(name.clone(), activity).is_none() {
                directory.order.push(name);
            }
        }
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    /// A fresh store holding the school's fixed activity list.
    pub fn seeded() -> Self {
        Self::from_entries(seed::mergington_activities())
    }

    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, name: &ActivityName) -> Option<Activity> {
        self.inner.read().by_name.get(name).cloned()
    }

    /// Consistent copy of the whole directory in listing order.
    pub fn snapshot(&self) -> DirectorySnapshot {
        let directory = self.inner.read();
        let entries = directory
            .order
            .iter()
            .filter_map(|name| {
                directory
                    .by_name
                    .get(name)
                    .map(|activity| (name.clone(), activity.clone()))
            })
            .collect();
        DirectorySnapshot { entries }
    }

    /// Runs `f` on the named activity while holding the write lock.
    /// Returns `None` when no such activity exists.
    pub fn with_activity_mut<R>(
        &self,
        name: &ActivityName,
        f: impl FnOnce(&mut Activity) -> R,
    ) -> Option<R> {
        let mut directory = self.inner.write();
        directory.by_name.get_mut(name).map(f)
    }
}

/// Point-in-time listing of the directory. Serializes as a JSON object keyed
/// by activity name, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot {
    entries: Vec<(ActivityName, Activity)>,
}

impl DirectorySnapshot {
    pub fn iter(&self) -> impl Iterator<Item = (&ActivityName, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name, activity))
    }

    #[cfg(test)]
    fn get(&self, name: &ActivityName) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    #[cfg(test)]
    fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl Serialize for DirectorySnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, max: u32, participants: &[&str]) -> (ActivityName, Activity) {
        let activity = Activity {
            description: "d".to_string(),
            schedule: "s".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| (*p).into()).collect(),
        };
        (ActivityName::new(name), activity)
    }

    #[test]
    fn snapshot_keeps_insertion_order() {
        let store = ActivityStore::from_entries([
            entry("Zeta", 1, &[]),
            entry("Alpha", 2, &[]),
            entry("Mu", 3, &[]),
        ]);
        assert_eq!(store.snapshot().names(), vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn repeated_name_replaces_record_in_place() {
        let store = ActivityStore::from_entries([
            entry("A", 1, &[]),
            entry("B", 2, &[]),
            entry("A", 9, &[]),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot().names(), vec!["A", "B"]);
        assert_eq!(store.get(&"A".into()).unwrap().max_participants, 9);
    }

    #[test]
    fn clones_share_the_directory() {
        let store = ActivityStore::from_entries([entry("A", 1, &[])]);
        let other = store.clone();
        other
            .with_activity_mut(&"A".into(), |a| a.participants.push("x@y".into()))
            .unwrap();
        assert_eq!(store.get(&"A".into()).unwrap().participants_count(), 1);
    }

    #[test]
    fn mutating_unknown_activity_returns_none() {
        let store = ActivityStore::from_entries([entry("A", 1, &[])]);
        let touched = store.with_activity_mut(&"B".into(), |_| ());
        assert!(touched.is_none());
        assert!(store.get(&"B".into()).is_none());
    }

    #[test]
    fn snapshot_is_detached_from_later_writes() {
        let store = ActivityStore::from_entries([entry("A", 1, &[])]);
        let before = store.snapshot();
        store.with_activity_mut(&"A".into(), |a| a.participants.push("x@y".into()));
        assert!(before.get(&"A".into()).unwrap().participants.is_empty());
    }

    #[test]
    fn snapshot_serializes_as_ordered_object() {
        let store = ActivityStore::from_entries([
            entry("B", 1, &["b@x"]),
            entry("A", 2, &[]),
        ]);
        let text = serde_json::to_string(&store.snapshot()).unwrap();
        assert_eq!(
            text,
            r#"{"B":{"description":"d","schedule":"s","max_participants":1,"participants":["b@x"]},"A":{"description":"d","schedule":"s","max_participants":2,"participants":[]}}"#
        );
    }

    #[test]
    fn seeded_store_has_every_activity() {
        let store = ActivityStore::seeded();
        assert_eq!(store.len(), 21);
        assert!(!store.is_empty());
    }
}
