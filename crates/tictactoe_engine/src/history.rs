//! Move history with optional first-in-first-out expiry.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Positions in the order they were played.
///
/// With a capacity, recording a move when the queue is already full
/// drops the oldest entry first and hands it back to the caller, who
/// must clear that cell on the board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveHistory {
    entries: VecDeque<Position>,
    capacity: Option<usize>,
}

impl MoveHistory {
    /// Creates an empty history, bounded when `capacity` is set.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Appends `pos`, returning the evicted position if the queue was full.
    ///
    /// Fullness is judged on the length before the push.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn record(&mut self, pos: Position) -> Option<Position> {
        let evicted = match self.capacity {
            Some(cap) if self.entries.len() >= cap => self.entries.pop_front(),
            _ => None,
        };
        if let Some(old) = evicted {
            debug!(evicted = ?old, "History full, expiring oldest move");
        }
        self.entries.push_back(pos);
        evicted
    }

    /// The position that the next recorded move would evict.
    pub fn next_to_expire(&self) -> Option<Position> {
        match self.capacity {
            Some(cap) if self.entries.len() >= cap => self.entries.front().copied(),
            _ => None,
        }
    }

    /// Most recently played position.
    pub fn last(&self) -> Option<Position> {
        self.entries.back().copied()
    }

    /// Number of moves held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no moves are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.entries.iter().copied()
    }

    /// Removes every entry, keeping the capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
