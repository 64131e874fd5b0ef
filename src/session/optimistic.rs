//! Optimistic local list for writes.
//!
//! A pending item is shown immediately and only becomes permanent when the
//! server confirms it. Any other outcome removes it.

use serde::Serialize;

use crate::session::writes::WriteOutcome;

/// Handle for a staged item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
enum Entry<T> {
    Confirmed(T),
    Pending(Ticket, T),
}

impl<T> Entry<T> {
    fn item(&self) -> &T {
        match self {
            Entry::Confirmed(item) | Entry::Pending(_, item) => item,
        }
    }
}

/// Newest-first list with staged (unconfirmed) entries.
#[derive(Debug, Clone)]
pub struct OptimisticList<T> {
    entries: Vec<Entry<T>>,
    next_ticket: u64,
}

impl<T> Default for OptimisticList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> OptimisticList<T> {
    /// Start from already-confirmed items.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            entries: items.into_iter().map(Entry::Confirmed).collect(),
            next_ticket: 0,
        }
    }

    /// Show `item` at the top before the server has confirmed it.
    pub fn stage(&mut self, item: T) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.entries.insert(0, Entry::Pending(ticket, item));
        ticket
    }

    /// Replace the staged item with the server's version.
    pub fn commit(&mut self, ticket: Ticket, confirmed: T) -> bool {
        match self.position(ticket) {
            Some(index) => {
                self.entries[index] = Entry::Confirmed(confirmed);
                true
            }
            None => false,
        }
    }

    /// Drop the staged item.
    pub fn rollback(&mut self, ticket: Ticket) -> bool {
        match self.position(ticket) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Commit on `Committed`, roll back on anything else.
    pub fn settle(&mut self, ticket: Ticket, outcome: &WriteOutcome<T>) -> bool
    where
        T: Clone,
    {
        match outcome {
            WriteOutcome::Committed(item) => self.commit(ticket, item.clone()),
            _ => {
                self.rollback(ticket);
                false
            }
        }
    }

    fn position(&self, ticket: Ticket) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| matches!(e, Entry::Pending(t, _) if *t == ticket))
    }

    /// All visible items, newest first.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(Entry::item)
    }

    /// Only the confirmed items.
    pub fn confirmed(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Confirmed(item) => Some(item),
            Entry::Pending(..) => None,
        })
    }

    /// Number of unconfirmed items.
    pub fn pending(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e, Entry::Pending(..))).count()
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Serialize> Serialize for OptimisticList<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items())
    }
}
