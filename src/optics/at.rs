//! Keyed CRUD access through a lens onto `Option<V>`.
//!
//! `At` gives every keyed container a total lens at each key: reading
//! yields `Some` when the key is present, writing `Some(v)` inserts or
//! updates, writing `None` deletes. This is the mutating counterpart of
//! [`Ixed`](super::Ixed), which never inserts.
//!
//! For position-indexed containers deletion shifts the following
//! positions; callers removing several positions should iterate from the
//! highest index down.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use focal::optics::{at, Lens};
//!
//! let mut scores = BTreeMap::new();
//! scores.insert("alice".to_string(), 10);
//!
//! let bob = at::<BTreeMap<String, i32>, _, _>("bob".to_string());
//! let scores = bob.set(scores, Some(7));
//! assert_eq!(bob.get(&scores), Some(7));
//!
//! let scores = bob.set(scores, None);
//! assert_eq!(bob.get(&scores), None);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::marker::PhantomData;

use super::lens::Lens;

/// Containers offering a total lens onto the optional value at a key.
pub trait At<I, V>: Sized {
    /// The lens type for one key.
    type Lens: Lens<Self, Option<V>>;

    /// Builds the lens focused at `index`.
    fn at(index: I) -> Self::Lens;
}

/// Builds the `At` lens for a container type.
pub fn at<S, I, V>(index: I) -> S::Lens
where
    S: At<I, V>,
{
    S::at(index)
}

/// The `At` lens for map-shaped containers.
pub struct MapAt<K, V> {
    key: K,
    _marker: PhantomData<V>,
}

impl<K, V> MapAt<K, V> {
    /// Creates the lens for one key.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }
}

impl<K: Clone, V> Clone for MapAt<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K, V> Lens<BTreeMap<K, V>, Option<V>> for MapAt<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn get(&self, source: &BTreeMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: BTreeMap<K, V>, value: Option<V>) -> BTreeMap<K, V> {
        match value {
            Some(value) => {
                source.insert(self.key.clone(), value);
            }
            None => {
                source.remove(&self.key);
            }
        }
        source
    }
}

impl<K, V> Lens<HashMap<K, V>, Option<V>> for MapAt<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn get(&self, source: &HashMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: HashMap<K, V>, value: Option<V>) -> HashMap<K, V> {
        match value {
            Some(value) => {
                source.insert(self.key.clone(), value);
            }
            None => {
                source.remove(&self.key);
            }
        }
        source
    }
}

impl<K, V> At<K, V> for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Lens = MapAt<K, V>;

    fn at(index: K) -> MapAt<K, V> {
        MapAt::new(index)
    }
}

impl<K, V> At<K, V> for HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    type Lens = MapAt<K, V>;

    fn at(index: K) -> MapAt<K, V> {
        MapAt::new(index)
    }
}

/// The `At` lens for a `Vec` position.
///
/// Setting `Some` past the tail appends at the tail rather than erroring;
/// setting `None` removes the element and shifts the suffix left.
pub struct VecAt<A> {
    index: usize,
    _marker: PhantomData<A>,
}

impl<A> VecAt<A> {
    /// Creates the lens for one position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }
}

impl<A> Clone for VecAt<A> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            _marker: PhantomData,
        }
    }
}

impl<A: Clone> Lens<Vec<A>, Option<A>> for VecAt<A> {
    fn get(&self, source: &Vec<A>) -> Option<A> {
        source.get(self.index).cloned()
    }

    fn set(&self, mut source: Vec<A>, value: Option<A>) -> Vec<A> {
        match value {
            Some(value) => {
                if self.index < source.len() {
                    source[self.index] = value;
                } else {
                    source.push(value);
                }
            }
            None => {
                if self.index < source.len() {
                    source.remove(self.index);
                }
            }
        }
        source
    }
}

impl<A: Clone> At<usize, A> for Vec<A> {
    type Lens = VecAt<A>;

    fn at(index: usize) -> VecAt<A> {
        VecAt::new(index)
    }
}
