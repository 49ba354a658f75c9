//! Entry id allocation.
//!
//! # Responsibility
//! - Hand out `EntryId` values for new experience/education entries.
//!
//! # Invariants
//! - Ids are strictly increasing for one allocator, so two entries created
//!   inside the same millisecond still get distinct ids.
//! - Ids stay close to epoch milliseconds so values look like the ids hosts
//!   already stored before this allocator existed.
//! - Once the counter reaches `i64::MAX`, ids fall back to the lowest value
//!   the caller reports as unused.

use super::document::{EntryId, ResumeDocument};
use std::time::{SystemTime, UNIX_EPOCH};

/// Monotonic id source seeded from the wall clock.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    last: i64,
}

impl IdAllocator {
    /// Creates an allocator whose ids are all greater than `floor`.
    pub fn new(floor: Option<EntryId>) -> Self {
        Self {
            last: floor.map_or(0, EntryId::get),
        }
    }

    /// Creates an allocator that never returns an id already used in `document`.
    pub fn for_document(document: &ResumeDocument) -> Self {
        Self::new(document.max_entry_id())
    }

    /// Returns the next id, never one for which `in_use` is true.
    pub fn next_id(&mut self, in_use: impl Fn(EntryId) -> bool) -> EntryId {
        self.next_at(now_epoch_ms())
            .filter(|id| !in_use(*id))
            .unwrap_or_else(|| lowest_unused(in_use))
    }

    /// Reserves `id` so later allocations stay above it.
    pub fn observe(&mut self, id: EntryId) {
        self.last = self.last.max(id.get());
    }

    fn next_at(&mut self, now_ms: i64) -> Option<EntryId> {
        let candidate = self.last.checked_add(1)?.max(now_ms);
        self.last = candidate;
        Some(EntryId(candidate))
    }
}

/// Smallest positive id not in use. A finite list of `n` entries leaves one
/// of `1..=n + 1` free, so the scan is short.
fn lowest_unused(in_use: impl Fn(EntryId) -> bool) -> EntryId {
    (1..=i64::MAX)
        .map(EntryId)
        .find(|id| !in_use(*id))
        .unwrap_or(EntryId(0))
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}

#[cfg(test)]
mod tests {
    use super::IdAllocator;
    use crate::model::document::EntryId;

    fn unused(_: EntryId) -> bool {
        false
    }

    #[test]
    fn ids_within_one_tick_are_distinct() {
        let mut allocator = IdAllocator::new(None);
        let first = allocator.next_at(1_000);
        let second = allocator.next_at(1_000);
        assert_eq!(first, Some(EntryId(1_000)));
        assert_eq!(second, Some(EntryId(1_001)));
    }

    #[test]
    fn ids_stay_above_floor_even_when_clock_is_behind() {
        let mut allocator = IdAllocator::new(Some(EntryId(5_000)));
        assert_eq!(allocator.next_at(10), Some(EntryId(5_001)));

        allocator.observe(EntryId(9_000));
        assert_eq!(allocator.next_at(10), Some(EntryId(9_001)));
    }

    #[test]
    fn next_id_tracks_the_clock() {
        let mut allocator = IdAllocator::new(Some(EntryId(2)));
        let id = allocator.next_id(unused);
        assert!(id.get() > 1_600_000_000_000);
        assert!(allocator.next_id(unused) > id);
    }

    #[test]
    fn exhausted_counter_falls_back_to_lowest_unused_id() {
        let mut allocator = IdAllocator::new(Some(EntryId(i64::MAX)));
        assert_eq!(allocator.next_at(10), None);

        let taken = [EntryId(1), EntryId(2), EntryId(i64::MAX)];
        let id = allocator.next_id(|id| taken.contains(&id));
        assert_eq!(id, EntryId(3));
        assert_eq!(allocator.next_id(|id| id == EntryId(1)), EntryId(2));
    }
}
