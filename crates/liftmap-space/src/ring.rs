//! Ring traversal orders for forward-only proximity search.
//!
//! A ring of radius `r` is the set of forward offsets `(dx, dy)` with
//! `dx + dy == r` and `dx, dy >= 0`; it has `r + 1` members. A
//! [`TraversalPolicy`] fixes the order in which those members are visited,
//! and that order is the only tie-break between equally distant elevators.
//!
//! Offsets never go negative. On a torus every direction is reachable by
//! wrapping, which is exactly what a unidirectional interconnect offers.

use std::fmt;
use std::iter::FusedIterator;

/// Order in which the offsets of one ring are visited.
///
/// # Examples
///
/// ```
/// use liftmap_space::TraversalPolicy;
///
/// let py: Vec<_> = TraversalPolicy::PrioritizeY.ring(2).collect();
/// assert_eq!(py, vec![(0, 2), (1, 1), (2, 0)]);
///
/// let mo: Vec<_> = TraversalPolicy::MiddleOut.ring(2).collect();
/// assert_eq!(mo, vec![(1, 1), (0, 2), (2, 0)]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraversalPolicy {
    /// Sweep from the pure `+y` offset `(0, r)` to the pure `+x` offset
    /// `(r, 0)`: offset `i` is `(i, r - i)`.
    PrioritizeY,
    /// Start at the diagonal `(ceil(r/2), floor(r/2))` and fan out,
    /// alternating sides: the `+y` side on odd steps, the `+x` side on even
    /// steps. Balanced routes win ties over axis-aligned ones.
    #[default]
    MiddleOut,
}

impl TraversalPolicy {
    /// Every policy, in declaration order.
    pub const ALL: [Self; 2] = [Self::PrioritizeY, Self::MiddleOut];

    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::PrioritizeY => "prioritize-y",
            Self::MiddleOut => "middle-out",
        }
    }

    /// Lazily enumerate the ring of the given radius in this policy's order.
    pub fn ring(self, radius: u32) -> RingOffsets {
        RingOffsets::new(self, radius)
    }

    /// The `index`-th offset of the ring of `radius`.
    ///
    /// `index` must be `<= radius`.
    pub fn offset_at(self, radius: u32, index: u32) -> (u32, u32) {
        debug_assert!(index <= radius, "ring index {index} beyond radius {radius}");
        match self {
            Self::PrioritizeY => (index, radius - index),
            Self::MiddleOut => {
                let cx = radius - radius / 2;
                let cy = radius / 2;
                let p = ((u64::from(index) + 1) >> 1) as u32;
                if index % 2 == 0 {
                    (cx + p, cy - p)
                } else {
                    (cx - p, cy + p)
                }
            }
        }
    }
}

impl fmt::Display for TraversalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Finite, restartable iterator over the offsets of one ring.
///
/// Yields exactly `radius + 1` distinct `(dx, dy)` pairs, each with
/// `dx + dy == radius`. Cloning captures the current position.
#[derive(Clone, Debug)]
pub struct RingOffsets {
    policy: TraversalPolicy,
    radius: u32,
    next: u64,
}

impl RingOffsets {
    /// Start a ring of `radius` in `policy` order.
    pub fn new(policy: TraversalPolicy, radius: u32) -> Self {
        Self {
            policy,
            radius,
            next: 0,
        }
    }

    /// Radius of this ring.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Policy this ring follows.
    pub fn policy(&self) -> TraversalPolicy {
        self.policy
    }

    /// Rewind to the first offset.
    pub fn restart(&mut self) {
        self.next = 0;
    }

    fn remaining(&self) -> u64 {
        (u64::from(self.radius) + 1).saturating_sub(self.next)
    }
}

impl Iterator for RingOffsets {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > u64::from(self.radius) {
            return None;
        }
        let index = self.next as u32;
        self.next += 1;
        Some(self.policy.offset_at(self.radius, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for RingOffsets {}

impl FusedIterator for RingOffsets {}
