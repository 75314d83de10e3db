/*!
# Visitation State

Shared discovery state for concurrent traversals.

An [`AtomicVisitSet`] holds one atomic claim counter per node. It is allocated by a
single traversal invocation, handed out by shared reference to that traversal's worker
tasks, and consumed (or dropped) when the traversal finishes. Two traversals never
share an instance.

The only legal mutation during a traversal is [`AtomicVisitSet::claim`]: an atomic
transition of a node from unclaimed to claimed that succeeds for exactly one caller
among any number of concurrent attempters. There are no locks and no other write path.
*/

use std::sync::atomic::{AtomicU8, Ordering};

use crate::{Node, NumNodes};

/// Final per-node claim count of a traversal.
///
/// After a correct run every entry is `0` (unreachable) or `1` (visited exactly once).
/// Counts above `1` only arise from [`AtomicVisitSet::claim_unsynced`].
pub type VisitMark = u8;

/// One claim counter per node, mutated through atomic operations only.
///
/// Counters saturate at `VisitMark::MAX` so that even a heavily racing traversal
/// cannot wrap a counter back to "unclaimed".
pub struct AtomicVisitSet {
    marks: Vec<AtomicU8>,
}

impl AtomicVisitSet {
    /// Creates a set of `n` unclaimed counters
    pub fn new(n: NumNodes) -> Self {
        let marks = (0..n).map(|_| AtomicU8::new(0)).collect();
        Self { marks }
    }

    /// Returns the number of counters
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns *true* if the set is empty
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Atomically claims node `u`. Returns *true* iff this call performed the
    /// transition from unclaimed to claimed; all concurrent competitors observe *false*.
    /// ** Panics if `u >= n` **
    pub fn claim(&self, u: Node) -> bool {
        self.marks[u as usize]
            .compare_exchange(0, 1, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
    }

    /// Claims node `u` with a plain check-then-increment instead of a single
    /// compare-and-set: two concurrent callers can both observe `0` and both increment,
    /// so a node may be claimed more than once.
    ///
    /// This is the contrast case to [`AtomicVisitSet::claim`] and exists for race
    /// diagnostics; real traversals must never use it. The storage stays atomic, which
    /// keeps the race a logic race (observable duplicate counts) instead of undefined
    /// behavior.
    /// ** Panics if `u >= n` **
    pub fn claim_unsynced(&self, u: Node) -> bool {
        let mark = &self.marks[u as usize];
        if mark.load(Ordering::Relaxed) == 0 {
            // saturating add keeps extreme races from wrapping to 0
            let _ = mark.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| {
                Some(c.saturating_add(1))
            });
            true
        } else {
            false
        }
    }

    /// Returns *true* if node `u` has been claimed at least once.
    /// ** Panics if `u >= n` **
    pub fn is_claimed(&self, u: Node) -> bool {
        self.marks[u as usize].load(Ordering::Acquire) > 0
    }

    /// Consumes the set and materializes the per-node claim counts
    pub fn into_marks(self) -> Vec<VisitMark> {
        self.marks.into_iter().map(AtomicU8::into_inner).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_is_exactly_once() {
        let set = AtomicVisitSet::new(4);

        assert!(set.claim(2));
        assert!(!set.claim(2));
        assert!(set.is_claimed(2));
        assert!(!set.is_claimed(0));

        assert_eq!(set.into_marks(), vec![0, 0, 1, 0]);
    }

    #[test]
    fn concurrent_claims_have_one_winner() {
        let set = AtomicVisitSet::new(1);

        let wins: usize = std::thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| s.spawn(|| set.claim(0) as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(wins, 1);
        assert_eq!(set.into_marks(), vec![1]);
    }

    #[test]
    fn unsynced_claim_counts_duplicates() {
        let set = AtomicVisitSet::new(2);

        // sequentially the unsynced claim behaves like the atomic one
        assert!(set.claim_unsynced(1));
        assert!(!set.claim_unsynced(1));
        assert_eq!(set.into_marks(), vec![0, 1]);
    }
}
