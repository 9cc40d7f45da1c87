use std::collections::HashSet;

/// Set of strings that remembers insertion order.
#[derive(Debug, Default, Clone)]
pub struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` unless it is already present. Returns `true` when the
    /// value was new.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string());
        self.items.push(value.to_string());
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<S: AsRef<str>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        for value in iter {
            set.insert(value.as_ref());
        }
        set
    }
}

impl<S: AsRef<str>> Extend<S> for OrderedSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        let set: OrderedSet = ["b", "a", "b", "c", "a"].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.into_vec(), vec!["b", "a", "c"]);
    }

    #[test]
    fn insert_reports_novelty() {
        let mut set = OrderedSet::new();
        assert!(set.is_empty());
        assert!(set.insert("x"));
        assert!(!set.insert("x"));
        assert!(set.contains("x"));
        assert!(!set.contains("X"));
    }

    #[test]
    fn extend_skips_known_values() {
        let mut set: OrderedSet = ["a"].into_iter().collect();
        set.extend(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(set.into_vec(), vec!["a", "b"]);
    }
}
