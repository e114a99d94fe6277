//! Deadline-ordered queue of pending respawns.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use super::kinds::{CustomerSlot, FoodSlot};

/// What to put back once a cooldown runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Respawn {
    Food(FoodSlot),
    Customer(CustomerSlot),
}

/// A respawn due at a point on the session clock.
///
/// Ordered by due time, then by insertion order, so entries sharing a
/// deadline fire in the order they were scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Scheduled {
    pub due: Duration,
    seq: u64,
    pub respawn: Respawn,
}

#[derive(Debug, Default)]
pub struct RespawnQueue {
    heap: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl RespawnQueue {
    pub fn push(&mut self, due: Duration, respawn: Respawn) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Scheduled { due, seq, respawn }));
    }

    /// Deadline of the earliest pending entry.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.heap.peek().map(|Reverse(entry)| entry.due)
    }

    /// Remove and return the earliest entry if it is due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Scheduled> {
        if self.next_due()? > now {
            return None;
        }
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Pending entries in firing order.
    #[must_use]
    pub fn pending(&self) -> Vec<Scheduled> {
        let mut entries: Vec<_> = self.heap.iter().map(|Reverse(entry)| *entry).collect();
        entries.sort();
        entries
    }
}
