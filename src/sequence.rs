//! Sequence tables: validated, read-only lists of timed actions.

use crate::types::{Entry, SequenceError};
use heapless::Vec;

/// A validated, borrowed table of entries.
///
/// The table never owns its entries. Any sequencer built on it borrows the
/// same storage, so the borrow checker guarantees the entries outlive every
/// sequencer that reads them. Every entry has a repeat count of at least 1.
///
/// # Type Parameters
/// * `'a` - Lifetime of the entry storage
/// * `W` - Width of each action payload in bytes
#[derive(Debug, Clone, Copy)]
pub struct SequenceTable<'a, const W: usize> {
    entries: &'a [Entry<W>],
}

impl<'a, const W: usize> SequenceTable<'a, W> {
    /// Wraps a slice of entries after validating it.
    ///
    /// An empty slice is accepted; sequencers built on it never run.
    ///
    /// # Errors
    /// * `ZeroRepeatCount` - An entry would never be active
    pub fn new(entries: &'a [Entry<W>]) -> Result<Self, SequenceError> {
        validate(entries)?;
        Ok(Self { entries })
    }

    /// Wraps a single entry as a one-entry table.
    pub fn single(entry: &'a Entry<W>) -> Result<Self, SequenceError> {
        Self::new(core::slice::from_ref(entry))
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a Entry<W>> {
        self.entries.get(index)
    }

    /// Returns the underlying entries.
    #[inline]
    pub fn entries(&self) -> &'a [Entry<W>] {
        self.entries
    }

    /// Total number of ticks in one pass through the table.
    pub fn total_steps(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(u64::from(e.repeat_count)))
    }
}

fn validate<const W: usize>(entries: &[Entry<W>]) -> Result<(), SequenceError> {
    match entries.iter().position(|e| e.repeat_count == 0) {
        Some(index) => Err(SequenceError::ZeroRepeatCount { index }),
        None => Ok(()),
    }
}

/// A sequence table that owns its entries, for tables assembled at run time.
///
/// # Type Parameters
/// * `W` - Width of each action payload in bytes
/// * `N` - Maximum number of entries
#[derive(Debug, Clone)]
pub struct OwnedTable<const W: usize, const N: usize> {
    entries: Vec<Entry<W>, N>,
}

impl<const W: usize, const N: usize> OwnedTable<W, N> {
    /// Creates a new table builder.
    pub fn builder() -> TableBuilder<W, N> {
        TableBuilder::new()
    }

    /// Borrows the entries as a sequence table.
    pub fn table(&self) -> SequenceTable<'_, W> {
        // Entries were validated by the builder.
        SequenceTable {
            entries: &self.entries,
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for constructing validated owned tables.
#[derive(Debug)]
pub struct TableBuilder<const W: usize, const N: usize> {
    entries: Vec<Entry<W>, N>,
}

impl<const W: usize, const N: usize> TableBuilder<W, N> {
    /// Creates a new empty table builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The table already holds `N` entries
    pub fn entry(mut self, repeat_count: u32, action: [u8; W]) -> Result<Self, SequenceError> {
        self.entries
            .push(Entry::new(repeat_count, action))
            .map_err(|_| SequenceError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the table.
    ///
    /// # Errors
    /// * `ZeroRepeatCount` - An entry has a repeat count of zero
    pub fn build(self) -> Result<OwnedTable<W, N>, SequenceError> {
        validate(&self.entries)?;
        Ok(OwnedTable {
            entries: self.entries,
        })
    }
}

impl<const W: usize, const N: usize> Default for TableBuilder<W, N> {
    fn default() -> Self {
        Self::new()
    }
}
