//! Generic keyed reconciliation
//!
//! Views that re-render incrementally diff their new item list against
//! the previously rendered keys. An item whose key survives is an
//! update, a new key is an entry, and a key that disappeared is an
//! exit. Both the scatter and the file composition views consume this
//! routine; neither re-creates entities whose key is unchanged.

use std::collections::HashSet;

/// Partitioned outcome of a keyed diff
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedDiff<T> {
    /// Items whose key was not previously rendered, in item order
    pub enter: Vec<T>,
    /// Items whose key was already rendered, in item order
    pub update: Vec<T>,
    /// Previously rendered keys with no matching item, in prior order
    pub exit: Vec<String>,
}

impl<T> KeyedDiff<T> {
    /// Whether the diff carries no work at all
    pub fn is_empty(&self) -> bool {
        self.enter.is_empty() && self.update.is_empty() && self.exit.is_empty()
    }
}

/// Diff `items` against the keys rendered last time.
///
/// Returns the partitioned diff together with the new key list, which
/// the caller stores for the next round. Item order is preserved in
/// `enter` and `update` so draw order survives the partitioning.
pub fn reconcile<T, F>(prev_keys: &[String], items: Vec<T>, key_fn: F) -> (KeyedDiff<T>, Vec<String>)
where
    F: Fn(&T) -> String,
{
    let prev: HashSet<&str> = prev_keys.iter().map(String::as_str).collect();

    let mut enter = Vec::new();
    let mut update = Vec::new();
    let mut next_keys = Vec::with_capacity(items.len());

    for item in items {
        let key = key_fn(&item);
        if prev.contains(key.as_str()) {
            update.push(item);
        } else {
            enter.push(item);
        }
        next_keys.push(key);
    }

    let next: HashSet<&str> = next_keys.iter().map(String::as_str).collect();
    let exit = prev_keys
        .iter()
        .filter(|k| !next.contains(k.as_str()))
        .cloned()
        .collect();

    (KeyedDiff { enter, update, exit }, next_keys)
}
