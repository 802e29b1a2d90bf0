//! Request generation counter for discarding superseded results.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter of issued requests.
///
/// Every new request takes a ticket with [`issue`](Self::issue). When its
/// result arrives, the owner applies it only if the ticket is still
/// [`current`](Self::is_current); a later `issue` call makes every earlier
/// ticket stale. The in-flight request itself is not aborted.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: AtomicU64,
}

/// Ticket handed out by [`RequestGeneration::issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding all earlier tickets.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}
