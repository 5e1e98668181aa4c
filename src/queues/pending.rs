use std::cmp::Reverse;

use crate::helpers::float_binaryheap::FloatBinaryHeap;
use crate::queues::event::Event;

// Category rank, then larger packets first. Both come from the event's content,
// so equal-time records extract in the same order whatever order they were read
// in. The id only separates packets that are otherwise interchangeable.
type TieKey = (u8, Reverse<u64>, u64);

/// Events not yet processed, ordered by `(time, category rank, size descending)`.
#[derive(Default)]
pub struct PendingEvents {
    heap: FloatBinaryHeap<TieKey, Event>,
}

impl PendingEvents {
    pub fn new () -> Self {
        PendingEvents { heap: FloatBinaryHeap::new() }
    }

    pub fn insert (&mut self, event: Event) {
        let tie = (event.get_category().rank(), Reverse(event.get_size()), event.get_id());
        self.heap.push(event.time_key(), tie, event)
    }

    pub fn peek_min (&self) -> Option<&Event> {
        self.heap.peek().map(|(_, e)| e)
    }

    pub fn extract_min (&mut self) -> Option<Event> {
        self.heap.pop().map(|(_, e)| e)
    }

    pub fn len (&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty (&self) -> bool {
        self.heap.is_empty()
    }
}

impl Extend<Event> for PendingEvents {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        for event in iter {
            self.insert(event);
        }
    }
}
