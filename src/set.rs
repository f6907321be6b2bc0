//! A mutable, unordered set of unique elements.
//!
//! This module provides [`Set`], a hash-based set that wraps
//! `HashMap<T, ()>` and exposes membership tests, classic set algebra,
//! and a functional-combinator surface.
//!
//! # Overview
//!
//! `Set` is keyed by value equality: an element type only needs `Hash`
//! and `Eq`. Elements are unique, have no multiplicity, and no order.
//!
//! - O(1) amortized contains
//! - O(1) amortized insert
//! - O(1) amortized remove
//! - O(1) len and `is_empty`
//!
//! Mutation happens in place; derived sets (union, intersection,
//! difference, filter, map results) are always new, independent sets
//! that never alias the operands.
//!
//! # Examples
//!
//! ```rust
//! use setkit::Set;
//!
//! let mut set = Set::new();
//! set.insert(1);
//! set.insert(2);
//! set.insert(2); // duplicate, no-op
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&1));
//! assert!(!set.contains(&3));
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use setkit::Set;
//!
//! let set_a: Set<i32> = [1, 2, 3].into();
//! let set_b: Set<i32> = [2, 3, 4].into();
//!
//! let union = set_a.union(&set_b);                        // {1, 2, 3, 4}
//! let intersection = set_a.intersection(&set_b);          // {2, 3}
//! let difference = set_a.difference(&set_b);              // {1}
//! let symmetric_diff = set_a.symmetric_difference(&set_b); // {1, 4}
//!
//! assert_eq!(union.len(), 4);
//! assert_eq!(intersection.len(), 2);
//! assert_eq!(difference.len(), 1);
//! assert_eq!(symmetric_diff.len(), 2);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

/// A [`Set`] backed by the `rustc-hash` Fx hasher.
///
/// Faster than the default hasher but not DoS-resistant; prefer it for
/// trusted, short keys.
#[cfg(feature = "fxhash")]
pub type FxSet<T> = Set<T, rustc_hash::FxBuildHasher>;

/// A [`Set`] backed by the `ahash` random-state hasher.
#[cfg(feature = "ahash")]
pub type ARandomSet<T> = Set<T, ahash::RandomState>;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered set of unique elements, backed by `HashMap<T, ()>`.
///
/// Elements are compared by value equality; the element type only needs
/// `Hash + Eq`. The hasher is pluggable through the `S` parameter and
/// defaults to [`RandomState`].
///
/// Two sets are equal when they have the same cardinality and every
/// element of one is contained in the other; iteration order never
/// participates in equality and is not guaranteed stable across calls.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`                  | O(1)              |
/// | `contains`             | O(1) amortized    |
/// | `insert`               | O(1) amortized    |
/// | `remove`               | O(1) amortized    |
/// | `len`                  | O(1)              |
/// | `is_empty`             | O(1)              |
/// | `union`                | O(n + m)          |
/// | `intersection`         | O(min(n, m))      |
/// | `difference`           | O(n)              |
/// | `symmetric_difference` | O(n + m)          |
///
/// # Examples
///
/// ```rust
/// use setkit::Set;
///
/// let set = Set::singleton(42);
/// assert!(set.contains(&42));
/// assert!(!set.contains(&0));
/// ```
#[derive(Clone)]
pub struct Set<T, S = RandomState> {
    inner: HashMap<T, (), S>,
}

impl<T> Set<T, RandomState> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Creates a new empty set with space for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }
}

impl<T: Hash + Eq> Set<T, RandomState> {
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(element);
        set
    }
}

impl<T, S> Set<T, S> {
    /// Creates a new empty set that uses the given hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use setkit::Set;
    ///
    /// let set: Set<i32, _> = Set::with_hasher(RandomState::new());
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new empty set with the given capacity and hasher.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2].into();
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(42);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes all elements from the set.
    ///
    /// The set stays usable afterwards; only its contents are gone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set: Set<i32> = [1, 2, 3].into();
    /// set.clear();
    ///
    /// assert!(set.is_empty());
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// The iteration order is unspecified and not guaranteed stable
    /// across calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3].into();
    ///
    /// let mut total = 0;
    /// for element in set.iter() {
    ///     total += element;
    /// }
    /// assert_eq!(total, 6);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.inner.keys(),
        }
    }

    /// Returns a reference to the underlying membership map.
    ///
    /// This is a borrowed view of live storage, not a copy. The borrow
    /// is shared, so the alias cannot be used to break set invariants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<&str> = ["a", "b"].into();
    /// let map = set.as_map();
    ///
    /// assert!(map.contains_key("a"));
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_map(&self) -> &HashMap<T, (), S> {
        &self.inner
    }

    /// Consumes the set and returns the underlying membership map.
    #[inline]
    #[must_use]
    pub fn into_map(self) -> HashMap<T, (), S> {
        self.inner
    }

    /// Returns a reference to the set's hasher.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }
}

// =============================================================================
// Mutation and Membership
// =============================================================================

impl<T: Hash + Eq, S: BuildHasher> Set<T, S> {
    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was not already present. Inserting
    /// a duplicate is a no-op, not an error.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1)); // already present
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        self.inner.insert(element, ()).is_none()
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present. Removing an absent
    /// element is a no-op, not an error.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set: Set<i32> = [1, 2].into();
    ///
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1)); // already gone
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element).is_some()
    }

    /// Removes an element and returns the stored value, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set: Set<String> = ["a".to_string()].into();
    ///
    /// assert_eq!(set.take("a"), Some("a".to_string()));
    /// assert_eq!(set.take("a"), None);
    /// ```
    pub fn take<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(element).map(|(found, ())| found)
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<String> = ["hello".to_string(), "world".to_string()].into();
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(element)
    }
}

// =============================================================================
// Set Algebra
// =============================================================================

impl<T: Clone + Hash + Eq, S: BuildHasher + Default> Set<T, S> {
    /// Returns the union of two sets.
    ///
    /// The union contains all elements that are in either set. Neither
    /// operand is modified.
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a: Set<i32> = [1, 2].into();
    /// let set_b: Set<i32> = [2, 3].into();
    ///
    /// let union = set_a.union(&set_b);
    ///
    /// assert_eq!(union.len(), 3);
    /// assert!(union.contains(&1));
    /// assert!(union.contains(&2));
    /// assert!(union.contains(&3));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity_and_hasher(self.len().max(other.len()), S::default());
        for element in self {
            result.insert(element.clone());
        }
        for element in other {
            result.insert(element.clone());
        }
        result
    }

    /// Returns the intersection of two sets.
    ///
    /// The intersection contains only elements that are in both sets.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a: Set<i32> = [1, 2, 3].into();
    /// let set_b: Set<i32> = [2, 3, 4].into();
    ///
    /// let intersection = set_a.intersection(&set_b);
    ///
    /// assert_eq!(intersection.len(), 2);
    /// assert!(intersection.contains(&2));
    /// assert!(intersection.contains(&3));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        // Iterate over the smaller set for better performance
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = Self::with_hasher(S::default());
        for element in smaller {
            if larger.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns the difference of two sets.
    ///
    /// The difference contains elements that are in `self` but not in
    /// `other`. The operation is asymmetric: `a.difference(&b)` and
    /// `b.difference(&a)` are different sets in general.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a: Set<i32> = [1, 2, 3].into();
    /// let set_b: Set<i32> = [2, 3, 4].into();
    ///
    /// let difference = set_a.difference(&set_b);
    ///
    /// assert_eq!(difference.len(), 1);
    /// assert!(difference.contains(&1));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(S::default());
        for element in self {
            if !other.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns the symmetric difference of two sets.
    ///
    /// The symmetric difference contains elements that are in either
    /// set but not in both.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a: Set<i32> = [1, 2, 3].into();
    /// let set_b: Set<i32> = [2, 3, 4].into();
    ///
    /// let symmetric_diff = set_a.symmetric_difference(&set_b);
    ///
    /// assert_eq!(symmetric_diff.len(), 2);
    /// assert!(symmetric_diff.contains(&1));
    /// assert!(symmetric_diff.contains(&4));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let a_minus_b = self.difference(other);
        let b_minus_a = other.difference(self);
        a_minus_b.union(&b_minus_a)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T, S> {
    /// Returns `true` if `self` is a subset of `other`.
    ///
    /// A set is a subset of another if all elements in `self` are also
    /// in `other`. The empty set is a subset of every set, including
    /// itself.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let subset: Set<i32> = [1, 2].into();
    /// let superset: Set<i32> = [1, 2, 3].into();
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }

        for element in self {
            if !other.contains(element) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if `self` is a superset of `other`.
    ///
    /// A set is a superset of another if all elements in `other` are
    /// also in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let superset: Set<i32> = [1, 2, 3].into();
    /// let subset: Set<i32> = [1, 2].into();
    ///
    /// assert!(superset.is_superset(&subset));
    /// assert!(!subset.is_superset(&superset));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a: Set<i32> = [1, 2].into();
    /// let set_b: Set<i32> = [3, 4].into();
    /// let set_c: Set<i32> = [2, 3].into();
    ///
    /// assert!(set_a.is_disjoint(&set_b));
    /// assert!(!set_a.is_disjoint(&set_c));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        // Iterate over the smaller set for better performance
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        for element in smaller {
            if larger.contains(element) {
                return false;
            }
        }
        true
    }
}

// =============================================================================
// Functional Combinators
// =============================================================================

impl<T, S> Set<T, S> {
    /// Calls `function` for each element, stopping early at the first
    /// element for which it returns `false`.
    ///
    /// Returning `true` means "keep going"; the first `false` halts the
    /// visit, matching the polarity of [`Iterator::all`] and
    /// `try_for_each`. Elements are visited in unspecified order, so a
    /// halting `function` must not assume which elements it has seen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3].into();
    ///
    /// let mut visited = 0;
    /// set.for_each_while(|_| {
    ///     visited += 1;
    ///     visited < 2
    /// });
    /// assert_eq!(visited, 2);
    /// ```
    pub fn for_each_while<F>(&self, mut function: F)
    where
        F: FnMut(&T) -> bool,
    {
        for element in self.iter() {
            if !function(element) {
                break;
            }
        }
    }

    /// Calls `function` for each element exactly once, in unspecified
    /// order, with no early exit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3].into();
    ///
    /// let mut total = 0;
    /// set.for_each(|element| total += element);
    /// assert_eq!(total, 6);
    /// ```
    pub fn for_each<F>(&self, function: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(function);
    }

    /// Folds the elements into an accumulator, starting from `initial`.
    ///
    /// Elements are combined in unspecified order; a non-commutative or
    /// non-associative `function` gives an unspecified (but total)
    /// result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3].into();
    ///
    /// let total = set.fold(10, |accumulator, element| accumulator + element);
    /// assert_eq!(total, 16);
    /// ```
    #[must_use]
    pub fn fold<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(initial, function)
    }

    /// Folds the elements starting from `T::default()`.
    ///
    /// The accumulator begins at the type's default value, never at an
    /// element. On an empty set this returns `T::default()`.
    ///
    /// Note that the default value is not an identity for every
    /// operation: reducing integers with multiplication always yields 0
    /// because the accumulator starts there. Use [`fold`](Self::fold)
    /// with an explicit identity when the default is not one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3].into();
    /// assert_eq!(set.reduce(|accumulator, element| accumulator + element), 6);
    ///
    /// let empty: Set<i32> = Set::new();
    /// assert_eq!(empty.reduce(|accumulator, element| accumulator + element), 0);
    /// ```
    #[must_use]
    pub fn reduce<F>(&self, function: F) -> T
    where
        T: Default,
        F: FnMut(T, &T) -> T,
    {
        self.fold(T::default(), function)
    }

    /// Returns `true` if any element satisfies the predicate.
    ///
    /// Returns `false` for empty sets. Short-circuits on the first
    /// match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3].into();
    ///
    /// assert!(set.any(|element| *element == 2));
    /// assert!(!set.any(|element| *element > 10));
    /// ```
    #[must_use]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if all elements satisfy the predicate.
    ///
    /// Returns `true` for empty sets (vacuous truth). Short-circuits on
    /// the first non-match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [2, 4, 6].into();
    ///
    /// assert!(set.all(|element| element % 2 == 0));
    /// assert!(!set.all(|element| *element > 3));
    /// ```
    #[must_use]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns `true` if no element satisfies the predicate.
    ///
    /// Returns `true` for empty sets (vacuous truth).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3].into();
    ///
    /// assert!(set.none(|element| *element > 10));
    /// assert!(!set.none(|element| *element == 2));
    /// ```
    #[must_use]
    pub fn none<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.iter().any(|element| predicate(element))
    }

    /// Returns a reference to some element satisfying the predicate, or
    /// `None` if no element matches.
    ///
    /// Elements are probed in unspecified order, so when several match
    /// it is unspecified which one is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3].into();
    ///
    /// assert_eq!(set.find(|element| element % 2 == 0), Some(&2));
    /// assert_eq!(set.find(|element| *element > 10), None);
    /// ```
    #[must_use]
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|&element| predicate(element))
    }

    /// Returns references to all elements satisfying the predicate, in
    /// unspecified order.
    ///
    /// Returns an empty `Vec` if no element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3, 4].into();
    ///
    /// let mut even: Vec<&i32> = set.find_all(|element| element % 2 == 0);
    /// even.sort();
    /// assert_eq!(even, [&2, &4]);
    /// ```
    #[must_use]
    pub fn find_all<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut matches = Vec::new();
        for element in self.iter() {
            if predicate(element) {
                matches.push(element);
            }
        }
        matches
    }
}

impl<T: Clone, S> Set<T, S> {
    /// Returns all elements as a `Vec`, in unspecified order.
    ///
    /// An empty set yields an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [3, 1, 2].into();
    ///
    /// let mut elements = set.to_vec();
    /// elements.sort_unstable();
    /// assert_eq!(elements, [1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone + Hash + Eq, S: BuildHasher + Default> Set<T, S> {
    /// Returns a new set with the elements for which the predicate
    /// returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3, 4].into();
    /// let even = set.filter(|element| element % 2 == 0);
    ///
    /// assert_eq!(even.len(), 2);
    /// assert!(even.contains(&2));
    /// assert!(even.contains(&4));
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut result = Self::with_hasher(S::default());
        for element in self {
            if predicate(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns a new set with the elements transformed by `function`.
    ///
    /// Results collapse by uniqueness: a non-injective `function`
    /// produces a smaller set, by design of the uniqueness invariant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3].into();
    /// let parities = set.map(|element| element % 2);
    ///
    /// // {1, 2, 3} collapses to {1, 0}
    /// assert_eq!(parities.len(), 2);
    /// assert!(parities.contains(&0));
    /// assert!(parities.contains(&1));
    /// ```
    #[must_use]
    pub fn map<F>(&self, mut function: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        let mut result = Self::with_hasher(S::default());
        for element in self {
            result.insert(function(element));
        }
        result
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// A borrowed iterator over the elements of a [`Set`].
pub struct Iter<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of a [`Set`].
pub struct IntoIter<T> {
    inner: hash_map::IntoIter<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(element, ())| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: HashMap::default(),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(|element| (element, ())).collect(),
        }
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T, RandomState> {
    /// Builds a set from an array; duplicates collapse silently.
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|element| (element, ())));
    }
}

impl<'a, T: 'a + Copy + Hash + Eq, S: BuildHasher> Extend<&'a T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for Set<T, S> {
    /// Sets are equal when they have the same cardinality and every
    /// element of one is contained in the other.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        for element in self {
            if !other.contains(element) {
                return false;
            }
        }

        true
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for Set<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    /// Renders all elements as `{a, b, c}` in unspecified order.
    ///
    /// Diagnostic output only; never parse it back or compare it for
    /// equality.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self.iter() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Operator Sugar
// =============================================================================

impl<T: Clone + Hash + Eq, S: BuildHasher + Default> BitOr<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns the set union, cloned into a new set.
    fn bitor(self, other: &Set<T, S>) -> Self::Output {
        self.union(other)
    }
}

impl<T: Clone + Hash + Eq, S: BuildHasher + Default> BitAnd<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns the set intersection, cloned into a new set.
    fn bitand(self, other: &Set<T, S>) -> Self::Output {
        self.intersection(other)
    }
}

impl<T: Clone + Hash + Eq, S: BuildHasher + Default> Sub<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns the set difference, cloned into a new set.
    fn sub(self, other: &Set<T, S>) -> Self::Output {
        self.difference(other)
    }
}

impl<T: Clone + Hash + Eq, S: BuildHasher + Default> BitXor<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns the set symmetric-difference, cloned into a new set.
    fn bitxor(self, other: &Set<T, S>) -> Self::Output {
        self.symmetric_difference(other)
    }
}

// Static assertions: no internal locking, so Send/Sync follow the element.
static_assertions::assert_impl_all!(Set<i32>: Send, Sync);
static_assertions::assert_impl_all!(Set<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
