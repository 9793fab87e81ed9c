use crate::database::activity_store::{ActivityStore, DirectorySnapshot};

/// Every activity with its roster, in listing order.
pub fn list_activities(store: &ActivityStore) -> DirectorySnapshot {
    store.snapshot()
}
