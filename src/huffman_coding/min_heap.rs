/// A binary min-heap ordered by `PartialOrd`, with sift-up insertion and
/// sift-down extraction. Elements that compare equal keep a fixed relative
/// order determined purely by the sequence of operations, so heaps fed the
/// same values in the same order always drain in the same order. Huffman
/// tree construction relies on that to stay reproducible.
#[derive(Debug)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T: PartialOrd> MinHeap<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        let mut i = self.elements.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.elements[i] < self.elements[parent] {
                self.elements.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    pub fn extract_min(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop();

        // Restore the heap property from the root down.
        let mut i = 0;
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < self.elements.len() && self.elements[left] < self.elements[smallest] {
                smallest = left;
            }
            if right < self.elements.len() && self.elements[right] < self.elements[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
        min
    }
}

#[cfg(test)]
mod test {
    use super::MinHeap;

    #[test]
    fn drains_in_ascending_order() {
        let mut heap = MinHeap::with_capacity(8);
        for v in [5, 3, 8, 1, 9, 2, 7, 4] {
            heap.insert(v);
        }
        let mut drained = Vec::new();
        while let Some(v) = heap.extract_min() {
            drained.push(v);
        }
        assert_eq!(drained, vec![1, 2, 3, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn equal_keys_drain_deterministically() {
        // Two heaps fed the same sequence of tied keys must agree.
        let seed = [(1, 'a'), (1, 'b'), (1, 'c'), (1, 'd')];
        let drain = |seed: &[(u32, char)]| {
            let mut heap = MinHeap::with_capacity(seed.len());
            for &(w, tag) in seed {
                heap.insert(Keyed(w, tag));
            }
            let mut out = Vec::new();
            while let Some(Keyed(_, tag)) = heap.extract_min() {
                out.push(tag);
            }
            out
        };
        assert_eq!(drain(&seed), drain(&seed));
    }

    #[test]
    fn empty_heap_yields_none() {
        let mut heap: MinHeap<u32> = MinHeap::with_capacity(0);
        assert!(heap.is_empty());
        assert_eq!(heap.extract_min(), None);
    }

    #[derive(Debug, PartialEq)]
    struct Keyed(u32, char);

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }
}
