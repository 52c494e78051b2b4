//! Priority set of subintervals keyed by their error estimate.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::integrate::traits::RuleEstimate;

/// A subinterval `[left, right]` with its latest local estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Left endpoint
    pub left: f64,
    /// Right endpoint (always greater than `left`)
    pub right: f64,
    /// Local integral estimate
    pub integral: f64,
    /// Local error estimate
    pub error: f64,
}

impl Interval {
    /// Build an interval record from a rule evaluation on `[left, right]`.
    pub fn new(left: f64, right: f64, estimate: RuleEstimate) -> Self {
        Self {
            left,
            right,
            integral: estimate.integral,
            error: estimate.error,
        }
    }

    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Midpoint used for bisection.
    pub fn midpoint(&self) -> f64 {
        self.left + (self.right - self.left) / 2.0
    }
}

/// Heap entry ordered by error only.
#[derive(Debug, Clone, Copy)]
struct ByError(Interval);

impl PartialEq for ByError {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByError {}

impl PartialOrd for ByError {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByError {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.error.total_cmp(&other.0.error)
    }
}

/// The active partition of the integration domain.
///
/// Backed by a max-heap on the error estimate, so the worst interval is
/// always available in O(1) and insertions/removals cost O(log n). Intervals
/// with equal error come out in an unspecified order.
#[derive(Debug, Clone, Default)]
pub struct IntervalSet {
    heap: BinaryHeap<ByError>,
}

impl IntervalSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` intervals.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Insert an interval.
    pub fn insert(&mut self, interval: Interval) {
        self.heap.push(ByError(interval));
    }

    /// Remove and return the interval with the largest error.
    pub fn pop_max_error(&mut self) -> Option<Interval> {
        self.heap.pop().map(|entry| entry.0)
    }

    /// The interval with the largest error, without removing it.
    pub fn peek_max_error(&self) -> Option<&Interval> {
        self.heap.peek().map(|entry| &entry.0)
    }

    /// Sum of the interval integrals and the root-sum-square of their errors.
    pub fn total(&self) -> (f64, f64) {
        let (integral, err2) = self
            .heap
            .iter()
            .fold((0.0, 0.0), |(integral, err2), entry| {
                (integral + entry.0.integral, err2 + entry.0.error * entry.0.error)
            });
        (integral, err2.sqrt())
    }

    /// Sum of the interval widths.
    pub fn total_width(&self) -> f64 {
        self.heap.iter().map(|entry| entry.0.width()).sum()
    }

    /// Number of intervals currently held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the set holds no intervals.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Iterate over the intervals in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.heap.iter().map(|entry| &entry.0)
    }
}
