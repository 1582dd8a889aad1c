//! Value counting that remembers first-seen order.
//!
//! Ties between equally frequent values always go to the value that appeared
//! first in the input. A plain `HashMap` count would make that depend on hash
//! order, so entries live in a `Vec` and the map only holds their positions.

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// A value together with how many rows carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Popular<T> {
    pub value: T,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct FrequencyCount<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Default for FrequencyCount<K> {
    fn default() -> Self {
        FrequencyCount {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyCount<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Number of distinct values seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most frequent value; the earliest-seen one among ties.
    pub fn mode(&self) -> Option<Popular<K>> {
        let mut best: Option<&(K, usize)> = None;
        for entry in &self.entries {
            if best.is_none_or(|b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(value, count)| Popular {
            value: value.clone(),
            count: *count,
        })
    }

    /// Every distinct value, most frequent first, ties in first-seen order.
    pub fn most_common(&self) -> Vec<Popular<K>> {
        let mut all: Vec<Popular<K>> = self
            .entries
            .iter()
            .map(|(value, count)| Popular {
                value: value.clone(),
                count: *count,
            })
            .collect();
        // stable sort keeps first-seen order within equal counts
        all.sort_by(|a, b| b.count.cmp(&a.count));
        all
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyCount<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counts = FrequencyCount::new();
        for key in iter {
            counts.add(key);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_picks_highest_count() {
        let counts: FrequencyCount<&str> = ["a", "b", "b", "c", "b"].into_iter().collect();
        assert_eq!(
            counts.mode(),
            Some(Popular {
                value: "b",
                count: 3
            })
        );
    }

    #[test]
    fn test_mode_tie_goes_to_first_seen() {
        let counts: FrequencyCount<&str> = ["z", "a", "a", "z"].into_iter().collect();
        assert_eq!(counts.mode().unwrap().value, "z");

        let counts: FrequencyCount<&str> = ["a", "z", "z", "a"].into_iter().collect();
        assert_eq!(counts.mode().unwrap().value, "a");
    }

    #[test]
    fn test_mode_of_nothing() {
        let counts: FrequencyCount<u32> = FrequencyCount::new();
        assert!(counts.is_empty());
        assert_eq!(counts.mode(), None);
        assert!(counts.most_common().is_empty());
    }

    #[test]
    fn test_most_common_is_stable_on_ties() {
        let counts: FrequencyCount<u32> = [3, 1, 2, 2, 1, 4].into_iter().collect();
        let order: Vec<(u32, usize)> = counts
            .most_common()
            .into_iter()
            .map(|p| (p.value, p.count))
            .collect();
        assert_eq!(order, vec![(1, 2), (2, 2), (3, 1), (4, 1)]);
    }

    #[test]
    fn test_add_counts_distinct_values() {
        let mut counts: FrequencyCount<&str> = FrequencyCount::new();
        counts.add("x");
        counts.add("y");
        counts.add("x");
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.mode(), Some(Popular { value: "x", count: 2 }));
    }
}
