use std::fmt::Debug;

/// A value paired with the priority it was queued under
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityEntry<V, P> {
    pub value: V,
    pub priority: P,
}

impl<V, P> PriorityEntry<V, P> {
    pub fn new(value: V, priority: P) -> Self {
        PriorityEntry { value, priority }
    }

    /// Splits the entry into its `(value, priority)` parts
    pub fn into_parts(self) -> (V, P) {
        (self.value, self.priority)
    }
}

/// A binary min-heap keyed on priority, used as the frontier of shortest path searches.
///
/// The same value may be queued any number of times; nothing is deduplicated.
/// Children of index `i` live at `2i + 1` and `2i + 2`, and every parent's
/// priority is `<=` its children's.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Backing storage in heap order
    heap: Vec<PriorityEntry<V, P>>,
}

impl<V, P> MinPriorityQueue<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue { heap: Vec::new() }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts `value` with the given priority in O(log n)
    pub fn enqueue(&mut self, value: V, priority: P) {
        self.heap.push(PriorityEntry::new(value, priority));
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the entry with the lowest priority, or `None` when empty
    pub fn dequeue(&mut self) -> Option<PriorityEntry<V, P>> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        min
    }

    /// Returns the entry with the lowest priority without removing it
    pub fn peek(&self) -> Option<&PriorityEntry<V, P>> {
        self.heap.first()
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Drains the queue, returning its entries in non-decreasing priority order
    pub fn into_sorted_vec(mut self) -> Vec<PriorityEntry<V, P>> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(entry) = self.dequeue() {
            sorted.push(entry);
        }
        sorted
    }

    /// Moves the entry at `idx` up while it is strictly smaller than its parent
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[idx].priority < self.heap[parent].priority {
                self.heap.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the entry at `idx` down towards whichever child is smaller.
    ///
    /// The right child is only chosen when it is strictly smaller than the
    /// left one, so equal siblings keep a fixed positional order.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut swap = None;

            if left < len && self.heap[left].priority < self.heap[idx].priority {
                swap = Some(left);
            }
            if right < len {
                let right_wins = match swap {
                    None => self.heap[right].priority < self.heap[idx].priority,
                    Some(l) => self.heap[right].priority < self.heap[l].priority,
                };
                if right_wins {
                    swap = Some(right);
                }
            }

            match swap {
                Some(child) => {
                    self.heap.swap(idx, child);
                    idx = child;
                }
                None => break,
            }
        }
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> Extend<(V, P)> for MinPriorityQueue<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    fn extend<I: IntoIterator<Item = (V, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<V, P> FromIterator<(V, P)> for MinPriorityQueue<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    fn from_iter<I: IntoIterator<Item = (V, P)>>(iter: I) -> Self {
        let mut queue = MinPriorityQueue::new();
        queue.extend(iter);
        queue
    }
}
