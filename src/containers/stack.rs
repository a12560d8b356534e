use crate::error::{CoreError, CoreResult};

/// A stack backed by a fixed number of slots.
///
/// The capacity is chosen by the caller (the algorithms use rows × columns)
/// and never grows: pushing past it returns [`CoreError::CapacityExceeded`].
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T: Copy> BoundedStack<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        BoundedStack {
            slots: vec![None; capacity],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Places `item` in the first empty slot above the current top.
    pub fn push(&mut self, item: T) -> CoreResult<()> {
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get_mut(self.len)
            .ok_or(CoreError::CapacityExceeded { capacity })?;
        *slot = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Clears the top slot and returns what it held.
    pub fn pop(&mut self) -> CoreResult<T> {
        if self.len == 0 {
            return Err(CoreError::Underflow);
        }
        self.len -= 1;
        self.slots[self.len].take().ok_or(CoreError::Underflow)
    }

    /// The top item, or `None` when the stack is empty.
    pub fn peek(&self) -> Option<T> {
        self.len.checked_sub(1).and_then(|top| self.slots[top])
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.slots[..self.len].iter().filter_map(|slot| *slot)
    }

    /// The occupied slots bottom to top, with the trailing empty slots dropped.
    pub fn compact(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Like [`compact`](Self::compact) but top to bottom.
    pub fn reverse(&self) -> Vec<T> {
        let mut items = self.compact();
        items.reverse();
        items
    }

    /// Concatenates two compacted stacks. Used to stitch the two halves of a
    /// bidirectional path together.
    pub fn merge(first: &[T], second: &[T]) -> Vec<T> {
        let mut merged = Vec::with_capacity(first.len() + second.len());
        merged.extend_from_slice(first);
        merged.extend_from_slice(second);
        merged
    }
}

impl<T: Copy + PartialEq> BoundedStack<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|held| held == *item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_three_overflows_then_underflows() {
        let mut stack = BoundedStack::with_capacity(3);
        for item in 1..=3 {
            assert!(stack.push(item).is_ok());
        }
        assert_eq!(
            stack.push(4),
            Err(CoreError::CapacityExceeded { capacity: 3 })
        );

        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(CoreError::Underflow));
    }

    #[test]
    fn test_peek_on_empty_is_none() {
        let mut stack = BoundedStack::with_capacity(2);
        assert_eq!(stack.peek(), None);
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert_eq!(stack.peek(), Some('b'));
        stack.pop().unwrap();
        assert_eq!(stack.peek(), Some('a'));
    }

    #[test]
    fn test_compact_drops_empty_slots() {
        let mut stack = BoundedStack::with_capacity(10);
        stack.push(5).unwrap();
        stack.push(6).unwrap();
        stack.push(7).unwrap();
        stack.pop().unwrap();
        assert_eq!(stack.compact(), vec![5, 6]);
        assert_eq!(stack.reverse(), vec![6, 5]);
        assert_eq!(stack.capacity(), 10);
    }

    #[test]
    fn test_merge_concatenates_in_order() {
        let mut left = BoundedStack::with_capacity(4);
        let mut right = BoundedStack::with_capacity(4);
        left.push(1).unwrap();
        left.push(2).unwrap();
        right.push(3).unwrap();
        right.push(4).unwrap();
        let merged = BoundedStack::merge(&left.compact(), &right.compact());
        assert_eq!(merged, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_capacity_rejects_first_push() {
        let mut stack: BoundedStack<u8> = BoundedStack::with_capacity(0);
        assert!(stack.is_empty());
        assert_eq!(
            stack.push(1),
            Err(CoreError::CapacityExceeded { capacity: 0 })
        );
        assert!(!stack.contains(&1));
    }
}
