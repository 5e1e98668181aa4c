use std::collections::VecDeque;

use crate::queues::event::Event;

/// Bounded FIFO of admitted packets. The caller checks `has_space` before
/// `admit`; a full buffer is the drop-tail decision, made by the engine.
#[derive(Debug)]
pub struct DropTailBuffer {
    capacity: usize,
    space_left: usize,
    queue: VecDeque<Event>,
}

impl DropTailBuffer {
    pub fn new(capacity: usize) -> Self {
        DropTailBuffer {
            capacity,
            space_left: capacity,
            queue: VecDeque::with_capacity(capacity),
        }
    }

    pub fn admit(&mut self, event: Event) {
        assert!(self.space_left > 0, "admit called on a full buffer");

        self.space_left -= 1;
        self.queue.push_back(event);
    }

    pub fn serve_head(&mut self) -> Option<Event> {
        let head = self.queue.pop_front()?;
        self.space_left += 1;
        Some(head)
    }

    pub fn peek_head(&self) -> Option<&Event> {
        self.queue.front()
    }

    pub fn has_space(&self) -> bool {
        self.space_left > 0
    }

    pub fn space_left(&self) -> usize {
        self.space_left
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packet(id: u64) -> Event {
        Event::arrival(id, id as f64, 100).unwrap()
    }

    #[test]
    fn serves_in_admission_order() {
        let mut buffer = DropTailBuffer::new(3);
        buffer.admit(packet(2));
        buffer.admit(packet(0));
        buffer.admit(packet(1));

        assert_eq!(buffer.peek_head().map(Event::get_id), Some(2));
        let served: Vec<u64> = std::iter::from_fn(|| buffer.serve_head())
            .map(|e| e.get_id())
            .collect();
        assert_eq!(served, vec![2, 0, 1]);
        assert!(buffer.is_empty());
        assert_eq!(buffer.serve_head(), None);
    }

    #[test]
    fn occupancy_plus_space_left_is_capacity() {
        let mut buffer = DropTailBuffer::new(2);
        assert_eq!(buffer.len() + buffer.space_left(), buffer.capacity());

        buffer.admit(packet(0));
        assert_eq!(buffer.len() + buffer.space_left(), 2);
        buffer.admit(packet(1));
        assert!(!buffer.has_space());
        assert_eq!(buffer.len() + buffer.space_left(), 2);

        buffer.serve_head();
        assert!(buffer.has_space());
        assert_eq!(buffer.len() + buffer.space_left(), 2);
    }

    #[test]
    #[should_panic(expected = "full buffer")]
    fn admit_on_full_buffer_panics() {
        let mut buffer = DropTailBuffer::new(1);
        buffer.admit(packet(0));
        buffer.admit(packet(1));
    }
}
