use healthsphere_domain::{Entity, ID};
use std::sync::Mutex;

/// Useful functions for creating inmemory repositories.
///
/// Every function holds the collection lock for its whole duration, so a
/// reader never observes a half finished write and always gets an owned copy.

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|item| item.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.lock().unwrap();
    let mut items = Vec::new();
    for item in collection.iter() {
        if compare(item) {
            items.push(item.clone());
        }
    }
    items
}

pub fn count<T>(collection: &Mutex<Vec<T>>) -> usize {
    collection.lock().unwrap().len()
}
