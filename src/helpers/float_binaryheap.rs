use ordered_float::NotNan;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

// Entries compare on (key, tie) in reverse so that BinaryHeap pops the smallest.
struct HeapEntry<K, T> where K: Ord {
    key: NotNan<f64>,
    tie: K,
    value: T
}

impl<K, T> PartialEq for HeapEntry<K, T> where K: Ord {
    fn eq(&self, other: &HeapEntry<K, T>) -> bool {
        self.key == other.key && self.tie == other.tie
    }
}

impl<K, T> Eq for HeapEntry<K, T> where K: Ord {}

impl<K, T> PartialOrd for HeapEntry<K, T> where K: Ord {
    fn partial_cmp(&self, other: &HeapEntry<K, T>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, T> Ord for HeapEntry<K, T> where K: Ord {
    fn cmp(&self, other: &HeapEntry<K, T>) -> Ordering {
        other.key.cmp(&self.key)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

/// Min-heap keyed by a float, with a secondary `Ord` key deciding between equal floats.
pub struct FloatBinaryHeap<K, T> where K: Ord {
    heap: BinaryHeap<HeapEntry<K, T>>,
}

impl<K, T> Default for FloatBinaryHeap<K, T> where K: Ord {
    fn default() -> Self {
        FloatBinaryHeap::new()
    }
}

impl<K, T> FloatBinaryHeap<K, T> where K: Ord {
    pub fn new () -> FloatBinaryHeap<K, T> {
        FloatBinaryHeap {
            heap: BinaryHeap::new()
        }
    }

    pub fn push (&mut self, key: NotNan<f64>, tie: K, value: T) {
        self.heap.push(HeapEntry { key, tie, value })
    }

    pub fn peek(&self) -> Option<(f64, &T)> {
        self.heap.peek().map(|r| (r.key.into_inner(), &r.value))
    }

    pub fn pop (&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|r| (r.key.into_inner(), r.value))
    }

    pub fn len (&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nn(x: f64) -> NotNan<f64> {
        NotNan::new(x).unwrap()
    }

    #[test]
    fn pops_smallest_key_first() {
        let mut heap = FloatBinaryHeap::new();
        heap.push(nn(3.0), 0, "c");
        heap.push(nn(1.0), 0, "a");
        heap.push(nn(2.0), 0, "b");

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some((1.0, &"a")));
        assert_eq!(heap.pop(), Some((1.0, "a")));
        assert_eq!(heap.pop(), Some((2.0, "b")));
        assert_eq!(heap.pop(), Some((3.0, "c")));
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn equal_keys_fall_back_to_tie_key() {
        let mut heap = FloatBinaryHeap::new();
        heap.push(nn(5.0), 2, "dropped");
        heap.push(nn(5.0), 0, "arrival");
        heap.push(nn(5.0), 1, "departure");
        heap.push(nn(4.0), 9, "earlier");

        let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|(_, v)| v)).collect();
        assert_eq!(order, vec!["earlier", "arrival", "departure", "dropped"]);
    }
}
