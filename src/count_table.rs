use std::collections::{hash_map, HashMap};

/// Occurrence counts keyed by token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountTable {
    counts: HashMap<String, u64>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
    }

    /// Adds every count of `other` into `self`, key by key.
    pub fn merge(&mut self, other: CountTable) {
        for (token, count) in other.counts {
            *self.counts.entry(token).or_insert(0) += count;
        }
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of observed tokens.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl IntoIterator for CountTable {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a> FromIterator<&'a str> for CountTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().fold(CountTable::new(), |mut acc, token| {
            acc.observe(token);
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_creates_then_increments() {
        let mut table = CountTable::new();
        table.observe("cat");
        table.observe("cat");
        table.observe("");
        assert_eq!(table.get("cat"), Some(2));
        assert_eq!(table.get(""), Some(1));
        assert_eq!(table.get("dog"), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn merge_sums_shared_keys() {
        let mut left: CountTable = ["a", "b", "a"].into_iter().collect();
        let right: CountTable = ["b", "c"].into_iter().collect();
        left.merge(right);
        assert_eq!(left.get("a"), Some(2));
        assert_eq!(left.get("b"), Some(2));
        assert_eq!(left.get("c"), Some(1));
        assert_eq!(left.total(), 5);
    }

    #[test]
    fn merge_order_does_not_matter() {
        let parts: Vec<CountTable> = vec![
            ["x", "y"].into_iter().collect(),
            ["y", "z", "z"].into_iter().collect(),
            ["x"].into_iter().collect(),
        ];

        let mut forward = CountTable::new();
        for part in parts.iter().cloned() {
            forward.merge(part);
        }
        let mut backward = CountTable::new();
        for part in parts.into_iter().rev() {
            backward.merge(part);
        }

        assert_eq!(forward, backward);
    }

    #[test]
    fn empty_table() {
        let table = CountTable::new();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }
}
