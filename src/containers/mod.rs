//! Containers used by the search algorithms to record frontiers and traces.
//!
//! - [`BoundedStack`]: fixed capacity, fails loudly instead of growing.
//! - [`Queue`]: FIFO with O(1) membership checks.
//! - [`PriorityQueue`]: linear-scan min queue; equal priorities come out in
//!   insertion order.

mod priority_queue;
mod queue;
mod stack;

pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use stack::BoundedStack;
