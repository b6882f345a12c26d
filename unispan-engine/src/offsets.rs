//! Pending-position bookkeeping for the counting contained scan

use smallvec::SmallVec;

/// Sorted queue of `(position, element_count)` pairs.
///
/// Keeps the smallest count seen for each position, so popping positions in
/// ascending order yields the minimum element count on any covering path
/// reaching that position.
#[derive(Debug, Default)]
pub(crate) struct OffsetQueue {
    entries: SmallVec<[(usize, usize); 8]>,
}

impl OffsetQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records that `pos` is reachable with `count` elements, keeping the
    /// smaller count if the position is already pending.
    pub(crate) fn push(&mut self, pos: usize, count: usize) {
        match self.entries.binary_search_by_key(&pos, |&(p, _)| p) {
            Ok(i) => {
                if count < self.entries[i].1 {
                    self.entries[i].1 = count;
                }
            }
            Err(i) => self.entries.insert(i, (pos, count)),
        }
    }

    /// Removes and returns the nearest pending position.
    pub(crate) fn pop_first(&mut self) -> Option<(usize, usize)> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }
}
