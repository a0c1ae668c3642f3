//! Safe partial access at a key, without insertion.
//!
//! `Ixed` focuses the value already present at a key as an
//! [`Affine`](super::Affine): reading a missing key yields no focus, and
//! every write on a missing key is a guaranteed no-op — unlike
//! [`At`](super::At), `ix` can never insert. Out-of-range access never
//! errors; it degrades to the empty focus.
//!
//! # Example
//!
//! ```
//! use focal::optics::{ix, Affine};
//!
//! let second = ix::<Vec<i32>, _, _>(1);
//! assert_eq!(second.get_optional(&vec![1, 2, 3]), Some(2));
//! assert_eq!(second.set(vec![1, 2, 3], 9), vec![1, 9, 3]);
//! assert_eq!(second.set(vec![1], 9), vec![1]); // missing: no-op
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::marker::PhantomData;

use super::affine::Affine;

/// Containers offering an affine onto the value at a key.
pub trait Ixed<I, V>: Sized {
    /// The affine type for one key.
    type Affine: Affine<Self, V>;

    /// Builds the affine focused at `index`.
    fn ix(index: I) -> Self::Affine;
}

/// Builds the `Ixed` affine for a container type.
pub fn ix<S, I, V>(index: I) -> S::Affine
where
    S: Ixed<I, V>,
{
    S::ix(index)
}

/// The `Ixed` affine for a `Vec` position.
pub struct VecIx<A> {
    index: usize,
    _marker: PhantomData<A>,
}

impl<A> VecIx<A> {
    /// Creates the affine for one position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }
}

impl<A> Clone for VecIx<A> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            _marker: PhantomData,
        }
    }
}

impl<A: Clone> Affine<Vec<A>, A> for VecIx<A> {
    fn get_optional(&self, source: &Vec<A>) -> Option<A> {
        source.get(self.index).cloned()
    }

    fn set(&self, mut source: Vec<A>, value: A) -> Vec<A> {
        if let Some(slot) = source.get_mut(self.index) {
            *slot = value;
        }
        source
    }

    fn remove(&self, mut source: Vec<A>) -> Vec<A> {
        if self.index < source.len() {
            source.remove(self.index);
        }
        source
    }
}

impl<A: Clone> Ixed<usize, A> for Vec<A> {
    type Affine = VecIx<A>;

    fn ix(index: usize) -> VecIx<A> {
        VecIx::new(index)
    }
}

/// The `Ixed` affine for map-shaped containers.
pub struct MapIx<K, V> {
    key: K,
    _marker: PhantomData<V>,
}

impl<K, V> MapIx<K, V> {
    /// Creates the affine for one key.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }
}

impl<K: Clone, V> Clone for MapIx<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K, V> Affine<BTreeMap<K, V>, V> for MapIx<K, V>
where
    K: Ord,
    V: Clone,
{
    fn get_optional(&self, source: &BTreeMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: BTreeMap<K, V>, value: V) -> BTreeMap<K, V> {
        if let Some(slot) = source.get_mut(&self.key) {
            *slot = value;
        }
        source
    }

    fn remove(&self, mut source: BTreeMap<K, V>) -> BTreeMap<K, V> {
        source.remove(&self.key);
        source
    }
}

impl<K, V> Affine<HashMap<K, V>, V> for MapIx<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn get_optional(&self, source: &HashMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: HashMap<K, V>, value: V) -> HashMap<K, V> {
        if let Some(slot) = source.get_mut(&self.key) {
            *slot = value;
        }
        source
    }

    fn remove(&self, mut source: HashMap<K, V>) -> HashMap<K, V> {
        source.remove(&self.key);
        source
    }
}

impl<K, V> Ixed<K, V> for BTreeMap<K, V>
where
    K: Ord,
    V: Clone,
{
    type Affine = MapIx<K, V>;

    fn ix(index: K) -> MapIx<K, V> {
        MapIx::new(index)
    }
}

impl<K, V> Ixed<K, V> for HashMap<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    type Affine = MapIx<K, V>;

    fn ix(index: K) -> MapIx<K, V> {
        MapIx::new(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_ix_never_inserts() {
        let tenth = ix::<Vec<i32>, _, _>(10);
        let source = vec![1, 2];
        assert_eq!(tenth.get_optional(&source), None);
        assert_eq!(tenth.set(source.clone(), 9), source);
        assert_eq!(tenth.modify(source.clone(), |x| x + 1), source);
    }

    #[test]
    fn vec_ix_removal_shifts() {
        let first = VecIx::new(0);
        assert_eq!(first.remove(vec![1, 2, 3]), vec![2, 3]);
        assert_eq!(first.remove(Vec::<i32>::new()), Vec::<i32>::new());
    }

    #[test]
    fn map_ix_updates_only_present_keys() {
        let key = ix::<BTreeMap<&str, i32>, _, _>("k");

        let empty = BTreeMap::new();
        assert_eq!(key.set(empty.clone(), 9), empty);

        let mut present = BTreeMap::new();
        present.insert("k", 1);
        let updated = key.set(present, 9);
        assert_eq!(updated.get("k"), Some(&9));

        let removed = key.remove(updated);
        assert!(!removed.contains_key("k"));
    }

    #[test]
    fn hash_map_ix_matches_btree_semantics() {
        let key = ix::<HashMap<&str, i32>, _, _>("k");
        let empty: HashMap<&str, i32> = HashMap::new();
        assert_eq!(key.set(empty.clone(), 9), empty);
    }
}
