//! Recorded results plus the cursor a renderer uses to play them back.

/// An append-only record of one run with a reveal pointer.
///
/// The pointer starts at -1 (nothing revealed) and moves one step per
/// [`update_pointer`](Trace::update_pointer) call until it equals the trace
/// length (everything revealed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<T> {
    items: Vec<T>,
    pointer: isize,
}

impl<T> Trace<T> {
    pub fn new() -> Self {
        Trace {
            items: Vec::new(),
            pointer: -1,
        }
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Trace { items, pointer: -1 }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Drops the recorded items and rewinds the pointer.
    pub fn clear(&mut self) {
        self.items.clear();
        self.pointer = -1;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn pointer(&self) -> isize {
        self.pointer
    }

    pub fn reset_pointer(&mut self) {
        self.pointer = -1;
    }

    /// Advances the pointer by one step. Returns `false` once the pointer has
    /// reached the end of the trace.
    pub fn update_pointer(&mut self) -> bool {
        let len = self.items.len() as isize;
        if self.pointer < len {
            self.pointer += 1;
        }
        self.pointer < len
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.pointer >= self.items.len() as isize
    }

    /// Items revealed so far.
    pub fn revealed(&self) -> &[T] {
        let shown = (self.pointer + 1).clamp(0, self.items.len() as isize) as usize;
        &self.items[..shown]
    }

    /// The item under the pointer, if the pointer is inside the trace.
    pub fn current(&self) -> Option<&T> {
        usize::try_from(self.pointer)
            .ok()
            .and_then(|index| self.items.get(index))
    }
}

impl<T> Default for Trace<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_walks_to_length() {
        let mut trace = Trace::from_items(vec!['a', 'b', 'c']);
        assert_eq!(trace.pointer(), -1);
        assert!(trace.revealed().is_empty());
        assert_eq!(trace.current(), None);

        assert!(trace.update_pointer());
        assert_eq!(trace.current(), Some(&'a'));
        assert_eq!(trace.revealed(), &['a']);
        assert!(trace.update_pointer());
        assert!(trace.update_pointer());
        assert_eq!(trace.revealed(), &['a', 'b', 'c']);

        assert!(!trace.update_pointer());
        assert_eq!(trace.pointer(), 3);
        assert!(trace.is_fully_revealed());
        assert!(!trace.update_pointer());
        assert_eq!(trace.pointer(), 3);
    }

    #[test]
    fn test_empty_trace_is_revealed_after_one_step() {
        let mut trace: Trace<u8> = Trace::new();
        assert!(!trace.is_fully_revealed());
        assert!(!trace.update_pointer());
        assert!(trace.is_fully_revealed());
    }

    #[test]
    fn test_reset_and_clear_rewind() {
        let mut trace = Trace::new();
        trace.push(1);
        trace.push(2);
        trace.update_pointer();
        trace.reset_pointer();
        assert_eq!(trace.pointer(), -1);
        trace.update_pointer();
        trace.clear();
        assert!(trace.is_empty());
        assert_eq!(trace.pointer(), -1);
    }
}
