//! Randomized growth frontier over pixel coordinates
//!
//! Coordinates move `Unvisited → Enqueued → Colored`. A coordinate is
//! scheduled at most once, so the queue never holds duplicates.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use bitvec::prelude::*;

use crate::spatial::grid::{Coordinate, in_bounds};

/// Lifecycle of a single output coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelState {
    /// Not yet reached by the growth front
    Unvisited,
    /// Waiting in the frontier
    Enqueued,
    /// Color assigned
    Colored,
}

/// Queue entry ordered by priority, then by insertion sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierEntry {
    /// Random priority drawn at enqueue time (lower is dequeued first)
    pub priority: u64,
    /// Insertion counter, breaks priority ties in favor of earlier entries
    pub sequence: u64,
    /// Coordinate awaiting a color
    pub position: Coordinate,
}

/// Min-priority queue plus per-coordinate state for a `width` × `height` grid
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    enqueued: BitVec,
    colored: BitVec,
    width: usize,
    height: usize,
    next_sequence: u64,
}

impl Frontier {
    /// Create a frontier with every coordinate unvisited
    pub fn new(width: usize, height: usize) -> Self {
        let cells = width * height;
        Self {
            heap: BinaryHeap::new(),
            enqueued: bitvec![0; cells],
            colored: bitvec![0; cells],
            width,
            height,
            next_sequence: 0,
        }
    }

    const fn index(&self, position: Coordinate) -> Option<usize> {
        if in_bounds(position, self.width, self.height) {
            Some(position.1 * self.width + position.0)
        } else {
            None
        }
    }

    /// Current state of `position` (`None` outside the grid)
    pub fn state(&self, position: Coordinate) -> Option<PixelState> {
        let index = self.index(position)?;
        let colored = self.colored.get(index).is_some_and(|bit| *bit);
        let enqueued = self.enqueued.get(index).is_some_and(|bit| *bit);
        Some(match (colored, enqueued) {
            (true, _) => PixelState::Colored,
            (false, true) => PixelState::Enqueued,
            (false, false) => PixelState::Unvisited,
        })
    }

    /// True if `position` has been colored
    pub fn is_colored(&self, position: Coordinate) -> bool {
        self.state(position) == Some(PixelState::Colored)
    }

    /// Enqueue an unvisited coordinate with the given priority
    ///
    /// Returns false, leaving the queue untouched, if the coordinate is out of
    /// bounds or has already been enqueued or colored.
    pub fn schedule(&mut self, position: Coordinate, priority: u64) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };
        if self.state(position) != Some(PixelState::Unvisited) {
            return false;
        }
        self.enqueued.set(index, true);
        self.heap.push(Reverse(FrontierEntry {
            priority,
            sequence: self.next_sequence,
            position,
        }));
        self.next_sequence += 1;
        true
    }

    /// Remove the lowest-priority coordinate that has not been colored yet
    pub fn pop(&mut self) -> Option<Coordinate> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if !self.is_colored(entry.position) {
                return Some(entry.position);
            }
        }
        None
    }

    /// Mark `position` as colored; returns false if it was already colored or out of bounds
    pub fn mark_colored(&mut self, position: Coordinate) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };
        if self.is_colored(position) {
            return false;
        }
        self.colored.set(index, true);
        true
    }

    /// Number of coordinates colored so far
    pub fn colored_count(&self) -> usize {
        self.colored.count_ones()
    }

    /// Entries still waiting in the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True once nothing is waiting
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
