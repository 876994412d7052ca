//! A binary min-heap that supports re-prioritizing an arbitrary element.
//!
//! See [`IndexedPriorityQueue<E, P>`] for more information.
//!
//! [`IndexedPriorityQueue<E, P>`]: struct.IndexedPriorityQueue.html

use std::{cmp::Ordering, fmt};

#[cfg(feature = "proptest")]
use proptest::prelude::*;

use crate::{
    error::{Error, Result},
    id::DenseId,
};

/// The position stored for an element that is not on the heap.
const ABSENT: usize = usize::MAX;

/// A prioritized element as it lives on the heap array.
#[derive(Clone, Copy, Debug)]
struct Item<E, P> {
    prio: P,
    elem: E,
}

/// A binary min-heap over `(priority, element)` pairs with a dense position
/// index.
///
/// A plain binary heap can only touch its minimum; this one additionally
/// keeps, for every element identifier, the slot that element currently
/// occupies on the heap array. That side index makes membership and
/// priority lookups `O(1)` and lets any present element be re-prioritized
/// or upserted in `O(log n)`, which is what graph algorithms needing a
/// decrease-key queue ask for.
///
/// The capacity is fixed at construction and identifiers are the dense
/// range `0 .. capacity`, so the position index is a plain array rather
/// than a hash map. Smaller priority means closer to the top; the order of
/// elements with equal priorities is unspecified.
///
/// # Examples
///
/// ```
/// use densekit::IndexedPriorityQueue;
///
/// let mut queue = IndexedPriorityQueue::<u32, u32>::with_capacity(4);
///
/// assert_eq!(queue.push(0, 30), Ok(true));
/// assert_eq!(queue.push(1, 10), Ok(true));
/// assert_eq!(queue.push(2, 20), Ok(true));
///
/// // Element 0 overtakes the rest.
/// assert_eq!(queue.change_priority(0, 5), Ok(true));
///
/// assert_eq!(queue.pop(), Some((0, 5)));
/// assert_eq!(queue.pop(), Some((1, 10)));
/// assert_eq!(queue.pop(), Some((2, 20)));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Clone)]
pub struct IndexedPriorityQueue<E, P> {
    /// The heap array; every slot's priority is at most its children's.
    heap: Vec<Item<E, P>>,
    /// The slot of each element on `heap`, or `ABSENT`.
    /// The length of this vector is the capacity and never changes.
    pos: Vec<usize>,
}

impl<E, P> IndexedPriorityQueue<E, P>
where
    E: DenseId,
    P: Copy + Ord,
{
    /// Constructs a queue for the identifiers `0 .. capacity`, all
    /// initially absent.
    ///
    /// The heap storage is reserved up front so no reallocation happens
    /// during the queue's lifetime.
    ///
    /// # Panics
    ///
    /// If `capacity` exceeds the number of identifiers `E` can name.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::IndexedPriorityQueue;
    ///
    /// let queue = IndexedPriorityQueue::<u16, i32>::with_capacity(100);
    ///
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.capacity(), 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity == 0 || capacity - 1 <= E::limit(),
            "a capacity of {} cannot be indexed by the identifier type",
            capacity,
        );

        Self {
            heap: Vec::with_capacity(capacity),
            pos: vec![ABSENT; capacity],
        }
    }

    /// Returns the number of elements currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no element is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of identifiers the queue was constructed for.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.pos.len()
    }

    /// Returns `true` if `elem` is currently queued.
    ///
    /// This is a single array probe and never fails; identifiers outside
    /// the capacity are simply never present.
    #[inline]
    pub fn contains(&self, elem: E) -> bool {
        self.pos.get(elem.index()).map_or(false, |&slot| slot != ABSENT)
    }

    /// Returns the element with the smallest priority.
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::<u32, u32>::with_capacity(3);
    /// queue.push(2, 8).unwrap();
    /// queue.push(0, 3).unwrap();
    ///
    /// assert_eq!(queue.top(), Ok(0));
    /// ```
    ///
    /// [`OutOfRange`]: enum.Error.html#variant.OutOfRange
    pub fn top(&self) -> Result<E> {
        self.heap
            .first()
            .map(|item| item.elem)
            .ok_or(Error::OutOfRange(0))
    }

    /// Returns the smallest priority on the queue.
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] if the queue is empty.
    ///
    /// [`OutOfRange`]: enum.Error.html#variant.OutOfRange
    pub fn top_priority(&self) -> Result<P> {
        self.heap
            .first()
            .map(|item| item.prio)
            .ok_or(Error::OutOfRange(0))
    }

    /// Queues `elem` with the given priority.
    ///
    /// Returns `false` without touching the queue if `elem` is already
    /// present; a push never overwrites an existing priority. This method
    /// will be executed in `O(log n)` time.
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] if `elem` is outside the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::<u32, u32>::with_capacity(2);
    ///
    /// assert_eq!(queue.push(1, 10), Ok(true));
    /// assert_eq!(queue.push(1, 99), Ok(false));
    /// assert_eq!(queue.priority(1), Ok(10));
    /// ```
    ///
    /// [`OutOfRange`]: enum.Error.html#variant.OutOfRange
    pub fn push(&mut self, elem: E, priority: P) -> Result<bool> {
        if self.slot(elem)? != ABSENT {
            return Ok(false);
        }

        let index = self.heap.len();
        self.pos[elem.index()] = index;
        self.heap.push(Item { prio: priority, elem });
        self.bubble_up(index);

        Ok(true)
    }

    /// Removes the element with the smallest priority and returns it
    /// together with its priority.
    ///
    /// Returns `None` if the queue is empty; popping an empty queue is not
    /// an error. This method will be executed in `O(log n)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::<u32, i32>::with_capacity(2);
    /// queue.push(0, 7).unwrap();
    ///
    /// assert_eq!(queue.pop(), Some((0, 7)));
    /// assert_eq!(queue.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<(E, P)> {
        let top = *self.heap.first()?;
        self.pos[top.elem.index()] = ABSENT;

        let last = self.heap.pop()?;
        if !self.heap.is_empty() {
            // The last item takes over the root slot and sinks back down.
            self.pos[last.elem.index()] = 0;
            self.heap[0] = last;
            self.bubble_down(0);
        }

        Some((top.elem, top.prio))
    }

    /// Returns the priority `elem` is queued with.
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] if `elem` is outside the capacity or not currently
    /// queued.
    ///
    /// [`OutOfRange`]: enum.Error.html#variant.OutOfRange
    pub fn priority(&self, elem: E) -> Result<P> {
        match self.slot(elem)? {
            ABSENT => Err(Error::OutOfRange(elem.index())),
            slot => Ok(self.heap[slot].prio),
        }
    }

    /// Changes the priority of `elem` and restores the heap order.
    ///
    /// Returns `false` without touching the queue if `elem` is not
    /// present. A single priority change can only violate the heap
    /// property in one direction, so the element bubbles up on a decrease
    /// and down on an increase; setting the priority it already has is a
    /// no-op that still returns `true`. This method will be executed in
    /// `O(log n)` time.
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] if `elem` is outside the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::<u32, u32>::with_capacity(8);
    /// queue.push(3, 12).unwrap();
    ///
    /// assert_eq!(queue.change_priority(3, 2), Ok(true));
    /// assert_eq!(queue.change_priority(7, 2), Ok(false));
    /// assert_eq!(queue.top_priority(), Ok(2));
    /// ```
    ///
    /// [`OutOfRange`]: enum.Error.html#variant.OutOfRange
    pub fn change_priority(&mut self, elem: E, priority: P) -> Result<bool> {
        let slot = self.slot(elem)?;
        if slot == ABSENT {
            return Ok(false);
        }

        match Ord::cmp(&priority, &self.heap[slot].prio) {
            Ordering::Equal => {}
            Ordering::Less => {
                self.heap[slot].prio = priority;
                self.bubble_up(slot);
            }
            Ordering::Greater => {
                self.heap[slot].prio = priority;
                self.bubble_down(slot);
            }
        }

        Ok(true)
    }

    /// Upserts: changes the priority of `elem` if it is queued and pushes
    /// it otherwise.
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] if `elem` is outside the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use densekit::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::<u32, u32>::with_capacity(4);
    ///
    /// queue.set_priority(2, 40).unwrap();
    /// queue.set_priority(2, 4).unwrap();
    ///
    /// assert_eq!(queue.len(), 1);
    /// assert_eq!(queue.priority(2), Ok(4));
    /// ```
    ///
    /// [`OutOfRange`]: enum.Error.html#variant.OutOfRange
    pub fn set_priority(&mut self, elem: E, priority: P) -> Result<()> {
        if !self.change_priority(elem, priority)? {
            self.push(elem, priority)?;
        }

        Ok(())
    }

    /// Looks up the heap slot recorded for `elem`, or `ABSENT`.
    fn slot(&self, elem: E) -> Result<usize> {
        self.pos
            .get(elem.index())
            .copied()
            .ok_or(Error::OutOfRange(elem.index()))
    }

    /// Swaps two heap slots and re-points both position entries.
    fn swap_slots(&mut self, first: usize, second: usize) {
        self.heap.swap(first, second);
        self.pos[self.heap[first].elem.index()] = first;
        self.pos[self.heap[second].elem.index()] = second;
    }

    /// Moves the item at `index` towards the root until its parent is no
    /// larger.
    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;

            if self.heap[index].prio < self.heap[parent].prio {
                self.swap_slots(index, parent);
                index = parent;
            } else {
                return;
            }
        }
    }

    /// Moves the item at `index` towards the leaves until no child is
    /// strictly smaller.
    fn bubble_down(&mut self, mut index: usize) {
        loop {
            let mut child = 2 * index + 1;
            if child >= self.heap.len() {
                return;
            }

            // Compare against the smaller of the two children.
            if child + 1 < self.heap.len()
                && self.heap[child + 1].prio < self.heap[child].prio
            {
                child += 1;
            }

            if self.heap[child].prio < self.heap[index].prio {
                self.swap_slots(index, child);
                index = child;
            } else {
                return;
            }
        }
    }
}

impl<E, P> fmt::Debug for IndexedPriorityQueue<E, P>
where
    E: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.heap.iter().map(|item| (&item.elem, &item.prio)))
            .finish()
    }
}

#[cfg(feature = "proptest")]
impl<E, P> Arbitrary for IndexedPriorityQueue<E, P>
where
    E: DenseId + 'static,
    P: Copy + Ord + fmt::Debug + Arbitrary + 'static,
    P::Strategy: 'static,
{
    type Parameters = (proptest::collection::SizeRange, P::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        (Vec::<P>::arbitrary_with(params))
            .prop_map(|priorities| {
                let mut queue = Self::with_capacity(priorities.len());

                for (index, priority) in priorities.into_iter().enumerate() {
                    // Each identifier is fresh so the push cannot fail.
                    let _ = queue.push(E::from_usize(index), priority);
                }

                queue
            })
            .boxed()
    }
}
