//! A [disjoint-sets/union-find] forest over dense integer identifiers.
//!
//! See [`DisjointSetForest<E>`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSetForest<E>`]: struct.DisjointSetForest.html

use std::{cmp::Ordering, fmt};

#[cfg(feature = "proptest")]
use proptest::prelude::*;

use crate::{
    disjoint_set::metadata::Metadata,
    error::{Error, Result},
    id::DenseId,
};

/// A [disjoint-sets/union-find] forest with union-by-size and path
/// compression.
///
/// The forest tracks a partition of the identifiers `0 .. len` into
/// disjoint sets. Every identifier starts in its own singleton set and
/// sets can be merged with the [`join`] method; sets only ever coarsen,
/// there is no way to split one. The [`find`] and [`join`] methods have an
/// amortized complexity of `O(α(n))` where `α` is the inverse Ackermann
/// function, which has value below 5 for any `n` that can be written in
/// the observable universe.
///
/// Two lookup variants exist: [`find`] takes `&self` and never mutates, so
/// it is safe on a forest handed out as a read-only view, while
/// [`find_compress`] additionally re-points the traversed path directly at
/// the root to flatten the tree for later calls. Both return the same
/// representative.
///
/// For every value the forest stores the exact number of values in the
/// subtree below it, so the size of any set and the partition-wide counts
/// [`count_disjoint`] and [`count_singleton`] are always exact.
///
/// # Examples
///
/// ```
/// use densekit::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::<u32>::new(4);
///
/// assert_eq!(forest.join(1, 2), Ok(true));
/// assert_eq!(forest.join(2, 3), Ok(true));
/// assert_eq!(forest.join(1, 3), Ok(false));
///
/// assert_eq!(forest.same_set(1, 3), Ok(true));
/// assert_eq!(forest.count_disjoint(), 2);
/// assert_eq!(forest.count_singleton(), 1);
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
/// [`join`]: #method.join
/// [`find`]: #method.find
/// [`find_compress`]: #method.find_compress
/// [`count_disjoint`]: #method.count_disjoint
/// [`count_singleton`]: #method.count_singleton
#[derive(Clone)]
pub struct DisjointSetForest<E> {
    /// The metadata for each value; the length is fixed at construction.
    meta: Vec<Metadata<E>>,
}

impl<E> DisjointSetForest<E>
where
    E: DenseId,
{
    /// Constructs a forest of `len` singleton sets over the identifiers
    /// `0 .. len`.
    ///
    /// All storage is allocated up front; the forest never reallocates.
    ///
    /// # Panics
    ///
    /// If `len` exceeds the number of identifiers `E` can name.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::DisjointSetForest;
    ///
    /// let forest = DisjointSetForest::<u8>::new(16);
    ///
    /// assert_eq!(forest.len(), 16);
    /// assert_eq!(forest.count_disjoint(), 16);
    /// ```
    pub fn new(len: usize) -> Self {
        assert!(
            len == 0 || len - 1 <= E::limit(),
            "a length of {} cannot be indexed by the identifier type",
            len,
        );

        Self {
            meta: (0..len).map(|index| Metadata::new(E::from_usize(index))).collect(),
        }
    }

    /// Returns the number of values the forest was constructed for.
    #[inline]
    pub fn len(&self) -> usize {
        self.meta.len()
    }

    /// Returns `true` if the forest holds no values.
    ///
    /// Every operation taking an identifier fails on an empty forest since
    /// no valid identifiers exist.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }

    /// Returns the largest valid identifier, or `None` for an empty
    /// forest.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::DisjointSetForest;
    ///
    /// assert_eq!(DisjointSetForest::<u32>::new(10).max_value(), Some(9));
    /// assert_eq!(DisjointSetForest::<u32>::new(0).max_value(), None);
    /// ```
    #[inline]
    pub fn max_value(&self) -> Option<E> {
        self.meta.len().checked_sub(1).map(E::from_usize)
    }

    /// Returns the representative of the set that `value` belongs to.
    ///
    /// Every value of a set gives the same representative, so comparing
    /// two results of `find` decides whether two values share a set. This
    /// method never mutates the forest and is therefore usable on shared
    /// read-only views; prefer [`find_compress`] when exclusive access is
    /// available.
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] if `value` is outside the forest.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::<u8>::new(3);
    /// forest.join(0, 1).unwrap();
    ///
    /// assert_eq!(forest.find(0), forest.find(1));
    /// assert_eq!(forest.find(2), Ok(2));
    /// assert!(forest.find(3).is_err());
    /// ```
    ///
    /// [`find_compress`]: #method.find_compress
    /// [`OutOfRange`]: enum.Error.html#variant.OutOfRange
    pub fn find(&self, value: E) -> Result<E> {
        let index = self.checked(value)?;

        Ok(E::from_usize(self.root_of(index)))
    }

    /// Returns the representative of the set that `value` belongs to and
    /// compresses the traversed path.
    ///
    /// Every value on the path is re-pointed directly at the root so later
    /// lookups in this part of the tree are nearly constant. The subtree
    /// sizes of the abandoned ancestors are kept exact while the path is
    /// detached node by node.
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] if `value` is outside the forest.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::<u16>::new(4);
    /// forest.join(0, 1).unwrap();
    /// forest.join(1, 2).unwrap();
    ///
    /// assert_eq!(forest.find_compress(2), Ok(0));
    /// assert_eq!(forest.find_compress(2), forest.find(2));
    /// ```
    ///
    /// [`OutOfRange`]: enum.Error.html#variant.OutOfRange
    pub fn find_compress(&mut self, value: E) -> Result<E> {
        let index = self.checked(value)?;
        let root = self.root_of(index);
        self.compress(index, root);

        Ok(E::from_usize(root))
    }

    /// Joins the sets of `first` and `second`.
    ///
    /// Returns `false` without changing the forest if both values already
    /// share a set; `join(v, v)` is always `false`. Otherwise the root
    /// with the smaller subtree is attached below the root with the larger
    /// one, which bounds the tree height by `O(log n)`, and the paths of
    /// both arguments are compressed.
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] if `first` or `second` is outside the forest.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::<u32>::new(4);
    ///
    /// // All values start in their own singleton set.
    /// assert_eq!(forest.count_disjoint(), 4);
    ///
    /// assert_eq!(forest.join(1, 2), Ok(true));
    /// assert_eq!(forest.len_of_set(1), Ok(2));
    ///
    /// // A redundant join changes nothing.
    /// assert_eq!(forest.join(2, 1), Ok(false));
    /// assert_eq!(forest.count_disjoint(), 3);
    /// ```
    ///
    /// [`OutOfRange`]: enum.Error.html#variant.OutOfRange
    pub fn join(&mut self, first: E, second: E) -> Result<bool> {
        let i = self.find_compress(first)?;
        let j = self.find_compress(second)?;

        if i == j {
            return Ok(false);
        }

        // We add to the tree with the larger subtree.
        match Ord::cmp(&self.meta[i.index()].size(), &self.meta[j.index()].size()) {
            Ordering::Less => self.merge_into(j, i),
            _ => self.merge_into(i, j),
        }

        Ok(true)
    }

    /// Returns `true` if `first` and `second` are in the same set.
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] if `first` or `second` is outside the forest.
    ///
    /// [`OutOfRange`]: enum.Error.html#variant.OutOfRange
    #[inline]
    pub fn same_set(&self, first: E, second: E) -> Result<bool> {
        Ok(self.find(first)? == self.find(second)?)
    }

    /// Returns the number of values in the set that `value` belongs to.
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] if `value` is outside the forest.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::<u32>::new(4);
    /// forest.join(0, 2).unwrap();
    ///
    /// assert_eq!(forest.len_of_set(2), Ok(2));
    /// assert_eq!(forest.len_of_set(3), Ok(1));
    /// ```
    ///
    /// [`OutOfRange`]: enum.Error.html#variant.OutOfRange
    pub fn len_of_set(&self, value: E) -> Result<usize> {
        let root = self.find(value)?;

        Ok(self.meta[root.index()].size())
    }

    /// Returns the number of disjoint sets currently in the forest.
    ///
    /// This is a diagnostic scan over all values in `O(n)` time, not an
    /// amortized operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::<u32>::new(5);
    /// forest.join(0, 1).unwrap();
    /// forest.join(3, 4).unwrap();
    ///
    /// assert_eq!(forest.count_disjoint(), 3);
    /// ```
    pub fn count_disjoint(&self) -> usize {
        self.meta
            .iter()
            .enumerate()
            .filter(|(index, meta)| meta.parent().index() == *index)
            .count()
    }

    /// Returns the number of sets that hold exactly one value.
    ///
    /// This is a diagnostic scan over all values in `O(n)` time, not an
    /// amortized operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::<u32>::new(5);
    /// forest.join(0, 1).unwrap();
    ///
    /// assert_eq!(forest.count_singleton(), 3);
    /// ```
    pub fn count_singleton(&self) -> usize {
        self.meta
            .iter()
            .enumerate()
            .filter(|(index, meta)| meta.parent().index() == *index && meta.size() == 1)
            .count()
    }

    /// Bounds-checks an identifier and returns it as a raw index.
    fn checked(&self, value: E) -> Result<usize> {
        let index = value.index();

        if index < self.meta.len() {
            Ok(index)
        } else {
            Err(Error::OutOfRange(index))
        }
    }

    /// Follows parent pointers from `index` to the root of its tree.
    fn root_of(&self, mut index: usize) -> usize {
        while self.meta[index].parent().index() != index {
            index = self.meta[index].parent().index();
        }

        index
    }

    /// Re-points every node on the path from `index` to `root` directly at
    /// the root.
    ///
    /// The transfers run on the unwind, ancestor before child, so every
    /// subtraction still sees the full subtree size of the node being
    /// detached. A node keeps its place inside the root's set, so only the
    /// old parent's size shrinks and the root's size never changes.
    fn compress(&mut self, index: usize, root: usize) {
        let parent = self.meta[index].parent().index();
        if index == root || parent == root {
            return;
        }

        self.compress(parent, root);

        let moved = self.meta[index].size();
        let new_size = self.meta[parent].size() - moved;
        self.meta[parent].set_size(new_size);
        self.meta[index].set_parent(E::from_usize(root));
    }

    /// Attaches the tree of `child` below `root` and absorbs its size.
    fn merge_into(&mut self, root: E, child: E) {
        let moved = self.meta[child.index()].size();
        self.meta[child.index()].set_parent(root);

        let total = self.meta[root.index()].size() + moved;
        self.meta[root.index()].set_size(total);
    }
}

impl<E> fmt::Debug for DisjointSetForest<E>
where
    E: DenseId,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_map()
            .entries((0..self.meta.len()).map(|index| (index, self.root_of(index))))
            .finish()
    }
}

#[cfg(feature = "proptest")]
impl<E> Arbitrary for DisjointSetForest<E>
where
    E: DenseId + 'static,
{
    type Parameters = proptest::collection::SizeRange;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(size_range: Self::Parameters) -> Self::Strategy {
        use std::collections::hash_map;

        proptest::collection::vec(proptest::num::usize::ANY, size_range)
            .prop_map(|set_numbers| {
                let mut forest = Self::new(set_numbers.len());

                // We map a `set_number` to a value of that set.
                let mut map = hash_map::HashMap::with_capacity(set_numbers.len());

                for (index, set_number) in set_numbers.into_iter().enumerate() {
                    let set_number = set_number.trailing_zeros();

                    match map.entry(set_number) {
                        hash_map::Entry::Occupied(occupied) => {
                            // Both values exist, so the join cannot fail.
                            let _ = forest
                                .join(E::from_usize(index), E::from_usize(*occupied.get()));
                        }
                        hash_map::Entry::Vacant(vacant) => {
                            vacant.insert(index);
                        }
                    }
                }

                forest
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestForest = DisjointSetForest<u16>;

    /// Recomputes every subtree size from scratch and compares it with the
    /// stored bookkeeping; also checks the root self-loop and that the
    /// root sizes sum to the forest length.
    fn check_sizes(forest: &TestForest) {
        let len = forest.len();

        let mut true_size = vec![0usize; len];
        for start in 0..len {
            let mut value = start;
            loop {
                true_size[value] += 1;

                let parent = forest.meta[value].parent().index();
                if parent == value {
                    break;
                }
                value = parent;
            }
        }

        let mut root_total = 0;
        for value in 0..len {
            assert_eq!(forest.meta[value].size(), true_size[value]);

            if forest.meta[value].parent().index() == value {
                root_total += forest.meta[value].size();
            }
        }

        assert_eq!(root_total, len);
    }

    #[test]
    fn zero_sized() {
        let mut forest = TestForest::new(0);

        assert!(forest.is_empty());
        assert_eq!(forest.max_value(), None);
        assert_eq!(forest.find(0), Err(Error::OutOfRange(0)));
        assert_eq!(forest.find(1), Err(Error::OutOfRange(1)));
        assert_eq!(forest.find_compress(0), Err(Error::OutOfRange(0)));
        assert_eq!(forest.join(0, 1), Err(Error::OutOfRange(0)));
        assert_eq!(forest.count_disjoint(), 0);
        assert_eq!(forest.count_singleton(), 0);
    }

    #[test]
    fn size_one() {
        let mut forest = TestForest::new(1);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest.max_value(), Some(0));
        assert_eq!(forest.find(0), Ok(0));
        assert_eq!(forest.find(1), Err(Error::OutOfRange(1)));

        assert_eq!(forest.join(0, 0), Ok(false));
        assert_eq!(forest.join(0, 1), Err(Error::OutOfRange(1)));

        check_sizes(&forest);
    }

    #[test]
    fn size_two() {
        let mut forest = TestForest::new(2);

        assert_eq!(forest.find(0), Ok(0));
        assert_eq!(forest.find(1), Ok(1));
        assert_eq!(forest.find(2), Err(Error::OutOfRange(2)));

        assert_eq!(forest.join(0, 0), Ok(false));
        assert_eq!(forest.join(0, 1), Ok(true));

        assert_eq!(forest.find(0), forest.find(1));
        assert_eq!(forest.count_disjoint(), 1);
        assert_eq!(forest.count_singleton(), 0);

        check_sizes(&forest);
    }

    #[test]
    fn residue_classes() {
        let mut forest = TestForest::new(128);

        for value in 0..120 {
            assert_eq!(forest.join(value, value + 8), Ok(true));
            check_sizes(&forest);
        }

        assert_eq!(forest.count_disjoint(), 8);
        assert_eq!(forest.count_singleton(), 0);

        for value in 0..128 {
            assert_eq!(forest.same_set(value, value % 8), Ok(true));
            assert_eq!(forest.len_of_set(value), Ok(16));
        }
    }

    #[test]
    fn chain_join_collapses_to_one_set() {
        let mut forest = TestForest::new(255);

        for value in 1..255 {
            assert_eq!(forest.join(0, value), Ok(true));
        }

        assert_eq!(forest.count_disjoint(), 1);
        assert_eq!(forest.count_singleton(), 0);
        assert_eq!(forest.len_of_set(0), Ok(255));
        assert_eq!(forest.len_of_set(254), Ok(255));
        assert_eq!(forest.join(0, 254), Ok(false));

        check_sizes(&forest);
    }

    #[test]
    fn join_decrements_count_by_exactly_one() {
        let mut forest = TestForest::new(16);

        for value in 0..15 {
            let before = forest.count_disjoint();
            let joined = forest.join(value, (value * 7 + 3) % 16).unwrap();
            let after = forest.count_disjoint();

            if joined {
                assert_eq!(after, before - 1);
            } else {
                assert_eq!(after, before);
            }
            check_sizes(&forest);
        }
    }

    #[test]
    fn compression_keeps_sizes_exact() {
        let mut forest = TestForest::new(8);

        // Build two height-two trees and hang one below the other so a
        // path of length two exists.
        forest.join(0, 1).unwrap();
        forest.join(2, 3).unwrap();
        forest.join(1, 3).unwrap();

        check_sizes(&forest);

        let root = forest.find(3).unwrap();
        assert_eq!(forest.find_compress(3), Ok(root));

        // Every traversed value now points straight at the root.
        assert_eq!(forest.meta[3].parent().index(), root.index());
        check_sizes(&forest);

        // Compressing again is idempotent.
        assert_eq!(forest.find_compress(3), Ok(root));
        check_sizes(&forest);
    }

    #[test]
    fn find_does_not_mutate() {
        let mut forest = TestForest::new(8);

        forest.join(0, 1).unwrap();
        forest.join(2, 3).unwrap();
        forest.join(1, 3).unwrap();

        let parents: Vec<usize> =
            (0..8).map(|value| forest.meta[value].parent().index()).collect();

        for value in 0..8 {
            forest.find(value).unwrap();
        }

        for value in 0..8 {
            assert_eq!(forest.meta[value].parent().index(), parents[value]);
        }
    }

    #[test]
    fn find_is_idempotent() {
        let mut forest = TestForest::new(32);

        for value in 0..31 {
            forest.join(value, value + 1).unwrap();
        }

        for value in 0..32 {
            let root = forest.find(value).unwrap();
            assert_eq!(forest.find(root), Ok(root));

            let root = forest.find_compress(value).unwrap();
            assert_eq!(forest.find_compress(root), Ok(root));
        }
    }

    #[test]
    #[should_panic]
    fn len_must_fit_identifier_type() {
        let _ = DisjointSetForest::<u8>::new(257);
    }
}
