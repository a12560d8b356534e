/// Min priority queue with a linear-scan dequeue.
///
/// `dequeue` and `peek` walk the entries left to right and keep the first one
/// whose priority is strictly lower than everything seen before it, so among
/// equal priorities the earliest insertion wins.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    entries: Vec<(T, P)>,
}

impl<T: Copy + PartialEq, P: Copy + PartialOrd> PriorityQueue<T, P> {
    pub fn new() -> Self {
        PriorityQueue {
            entries: Vec::new(),
        }
    }

    pub fn enqueue(&mut self, item: T, priority: P) {
        self.entries.push((item, priority));
    }

    fn min_index(&self) -> Option<usize> {
        let mut best: Option<(usize, P)> = None;
        for (index, &(_, priority)) in self.entries.iter().enumerate() {
            let lower = match best {
                Some((_, lowest)) => priority < lowest,
                None => true,
            };
            if lower {
                best = Some((index, priority));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Removes and returns the earliest-inserted entry with the lowest priority.
    pub fn dequeue(&mut self) -> Option<(T, P)> {
        let index = self.min_index()?;
        Some(self.entries.remove(index))
    }

    pub fn peek(&self) -> Option<(T, P)> {
        self.min_index().map(|index| self.entries[index])
    }

    /// Decrease-key: gives the first queued `item` a new priority in place.
    /// Returns `false` if the item is not queued.
    pub fn replace(&mut self, item: T, priority: P) -> bool {
        match self.entries.iter_mut().find(|(queued, _)| *queued == item) {
            Some(entry) => {
                entry.1 = priority;
                true
            }
            None => false,
        }
    }

    pub fn exists(&self, item: &T) -> bool {
        self.entries.iter().any(|(queued, _)| queued == item)
    }

    pub fn priority_of(&self, item: &T) -> Option<P> {
        self.entries
            .iter()
            .find(|(queued, _)| queued == item)
            .map(|&(_, priority)| priority)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T: Copy + PartialEq, P: Copy + PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
