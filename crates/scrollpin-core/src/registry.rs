//! Page-scoped registry of pinned ranges.
//!
//! Sections register on mount and get a [`PinHandle`] back; the handle is
//! the only way to update or remove the range. Every change bumps the
//! registry epoch so consumers can tell a stale snapshot from a fresh one.

use fnv::FnvHashMap;
use std::fmt;

use crate::error::{ChoreoError, Result};
use crate::range::PinnedRange;

/// Opaque token returned by [`PinRegistry::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinHandle(u64);

impl PinHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PinHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pin#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    range: PinnedRange,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct PinRegistry {
    entries: FnvHashMap<PinHandle, Entry>,
    next_id: u64,
    next_seq: u64,
    epoch: u64,
    expected: Option<usize>,
}

impl PinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, range: PinnedRange) -> PinHandle {
        let handle = PinHandle(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(handle, Entry { range, seq });
        self.epoch += 1;
        if self.expected.is_some_and(|n| self.entries.len() >= n) {
            // Barrier released; later unregisters do not re-arm it
            self.expected = None;
        }
        handle
    }

    pub fn unregister(&mut self, handle: PinHandle) -> bool {
        let removed = self.entries.remove(&handle).is_some();
        if removed {
            self.epoch += 1;
        }
        removed
    }

    /// Replace a range in place, keeping its registration order.
    pub fn update(&mut self, handle: PinHandle, range: PinnedRange) -> Result<()> {
        let entry = self
            .entries
            .get_mut(&handle)
            .ok_or(ChoreoError::UnknownHandle(handle.0))?;
        if entry.range != range {
            entry.range = range;
            self.epoch += 1;
        }
        Ok(())
    }

    pub fn get(&self, handle: PinHandle) -> Option<PinnedRange> {
        self.entries.get(&handle).map(|e| e.range)
    }

    /// Ranges sorted by `start`; equal starts keep registration order.
    pub fn sorted_ranges(&self) -> Vec<PinnedRange> {
        let mut entries: Vec<&Entry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.range.start().total_cmp(&b.range.start()).then(a.seq.cmp(&b.seq)));
        entries.into_iter().map(|e| e.range).collect()
    }

    /// Drop every range; handles issued before this are dead.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() || self.expected.is_some() {
            self.entries.clear();
            self.epoch += 1;
        }
        self.expected = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Announce how many sections the current page will register.
    pub fn expect(&mut self, count: usize) {
        self.expected = Some(count);
    }

    /// True once every announced section has registered. Without an
    /// announcement the registry counts as complete.
    pub fn is_complete(&self) -> bool {
        self.expected.map_or(true, |n| self.entries.len() >= n)
    }
}
