use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::hash::Hash;

/// Unbounded FIFO queue.
///
/// Keeps a count per queued item so [`exists`](Queue::exists) does not have to
/// walk the whole queue.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
    counts: FxHashMap<T, usize>,
}

impl<T: Copy + Eq + Hash> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
            counts: FxHashMap::default(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
        *self.counts.entry(item).or_insert(0) += 1;
    }

    pub fn dequeue(&mut self) -> Option<T> {
        let item = self.items.pop_front()?;
        if let Some(count) = self.counts.get_mut(&item) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&item);
            }
        }
        Some(item)
    }

    pub fn exists(&self, item: &T) -> bool {
        self.counts.contains_key(item)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Copy + Eq + Hash> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_exists_tracks_duplicates() {
        let mut queue = Queue::new();
        queue.enqueue('x');
        queue.enqueue('x');
        queue.enqueue('y');
        assert!(queue.exists(&'x'));

        queue.dequeue();
        assert!(queue.exists(&'x'));
        queue.dequeue();
        assert!(!queue.exists(&'x'));
        assert!(queue.exists(&'y'));
    }
}
