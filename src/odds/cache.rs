use super::distribution::Distribution;
use crate::cards::composition::Reduced;
use crate::cards::rank::Rank;
use std::collections::HashMap;
use std::sync::RwLock;

/// Cache key: the fixed party's up-card plus the reduced composition.
/// The stored distribution depends on nothing else, so entries are
/// reusable across any hand or shoe that reaches the same key.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Key {
    pub up: Rank,
    pub shoe: Reduced,
}

impl From<(Rank, Reduced)> for Key {
    fn from((up, shoe): (Rank, Reduced)) -> Self {
        Self { up, shoe }
    }
}

/// Memoized top-level distributions. Append-only within a process;
/// concurrent computation of the same key is safe to duplicate, so
/// inserts are last-write-wins and never read-modify-write.
#[derive(Debug, Default)]
pub struct Cache(RwLock<HashMap<Key, Distribution>>);

impl Cache {
    pub fn get(&self, key: &Key) -> Option<Distribution> {
        self.0.read().expect("cache lock").get(key).copied()
    }

    pub fn put(&self, key: Key, distribution: Distribution) {
        self.0.write().expect("cache lock").insert(key, distribution);
    }

    pub fn len(&self) -> usize {
        self.0.read().expect("cache lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all entries, for the durable store.
    pub fn entries(&self) -> Vec<(Key, Distribution)> {
        self.0
            .read()
            .expect("cache lock")
            .iter()
            .map(|(k, v)| (*k, *v))
            .collect()
    }
}

impl FromIterator<(Key, Distribution)> for Cache {
    fn from_iter<I: IntoIterator<Item = (Key, Distribution)>>(iter: I) -> Self {
        Self(RwLock::new(iter.into_iter().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::composition::Composition;
    use crate::odds::bucket::Bucket;

    #[test]
    fn round_trip() {
        let cache = Cache::default();
        let key = Key::from((Rank::Ace, Composition::full(2).reduce()));
        assert!(cache.get(&key).is_none());
        cache.put(key, Distribution::unit(Bucket::Bust));
        assert!(cache.get(&key) == Some(Distribution::unit(Bucket::Bust)));
        assert!(cache.len() == 1);
    }

    #[test]
    fn ten_valued_upcards_key_separately() {
        // same distribution lands under both keys; that is redundancy,
        // not inconsistency
        let shoe = Composition::full(1).reduce();
        let cache = Cache::default();
        cache.put(Key::from((Rank::Jack, shoe)), Distribution::unit(Bucket::Seventeen));
        assert!(cache.get(&Key::from((Rank::Queen, shoe))).is_none());
    }
}
