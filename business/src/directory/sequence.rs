//! Request tickets for ordering fetch completions.
//!
//! Every page fetch takes a [`Ticket`] when it is issued. Completions arrive in
//! any order; a completion is applied only when its ticket is newer than the
//! one behind the currently published page. Older completions still resolve
//! but their results are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Position of a request in issue order. Higher is newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub(crate) u64);

impl Ticket {
    /// Ticket value that no issued request ever carries.
    pub const NONE: Self = Self(0);

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_newer_than(self, other: Self) -> bool {
        self.0 > other.0
    }
}

/// Monotonic ticket dispenser.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// The most recently issued ticket, or [`Ticket::NONE`].
    pub fn latest(&self) -> Ticket {
        Ticket(self.issued.load(Ordering::SeqCst))
    }

    /// `true` when no request has been issued after `ticket`.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket == self.latest()
    }
}
