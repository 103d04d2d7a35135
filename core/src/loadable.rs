//! Lifecycle tracking for asynchronously fetched resources.
//!
//! A [`Loadable`] is a single resource slot. It records where the most
//! recent fetch attempt stands (idle, pending, fulfilled, rejected) and
//! holds either the fulfilled value or the failure message, never both.
//!
//! Overlapping fetches against one slot are disambiguated by a
//! monotonically increasing [`RequestToken`]: [`Loadable::begin`] issues a
//! fresh token, and a completion settles the slot only if it still carries
//! the latest token. The most recently started fetch therefore wins
//! regardless of the order in which responses arrive.

use std::fmt;

/// Identifier for one fetch attempt against one slot.
///
/// Tokens increase monotonically per slot and are only meaningful for the
/// slot that issued them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// The token held by a slot before any fetch has started.
    #[must_use]
    pub const fn initial() -> Self {
        Self(0)
    }

    /// The token issued after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a slot stands in its fetch lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadStatus {
    /// No fetch has been attempted.
    Idle,
    /// A fetch is in flight.
    Pending,
    /// The most recent fetch succeeded.
    Fulfilled,
    /// The most recent fetch failed.
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Slot<T> {
    Idle,
    Pending { stale: Option<T> },
    Fulfilled(T),
    Rejected { message: String },
}

/// One asynchronous resource slot.
///
/// Every operation is total: transitions never panic and never return an
/// error. By construction the fulfilled value and the failure message can
/// never be present at the same time.
///
/// [`begin`](Loadable::begin) keeps a previously fulfilled value around as
/// stale data while the refresh is in flight, so callers can keep
/// rendering the old value (stale-while-revalidate). A failed attempt
/// drops the value, so a retry after rejection starts from nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loadable<T> {
    state: Slot<T>,
    token: RequestToken,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Loadable<T> {
    /// Creates an idle slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Slot::Idle,
            token: RequestToken::initial(),
        }
    }

    /// Starts a fetch.
    ///
    /// The slot becomes pending, any previous error is cleared, and a
    /// previously fulfilled value is retained as stale data. Returns the
    /// token identifying this fetch; completions must present the same
    /// token to settle the slot.
    ///
    /// Calling `begin` while already pending re-issues: the token advances
    /// and the completion of the earlier fetch becomes stale.
    pub fn begin(&mut self) -> RequestToken {
        self.token = self.token.next();
        let stale = match std::mem::replace(&mut self.state, Slot::Idle) {
            Slot::Fulfilled(value) => Some(value),
            Slot::Pending { stale } => stale,
            Slot::Idle | Slot::Rejected { .. } => None,
        };
        self.state = Slot::Pending { stale };
        self.token
    }

    /// Settles the fetch identified by `token` with a value.
    ///
    /// Returns `true` if the completion was applied, `false` if `token` is
    /// stale because a newer fetch has been issued since.
    pub fn succeed(&mut self, token: RequestToken, value: T) -> bool {
        if token != self.token {
            return false;
        }
        self.state = Slot::Fulfilled(value);
        true
    }

    /// Settles the fetch identified by `token` with a failure message.
    ///
    /// Returns `true` if the completion was applied, `false` if `token` is
    /// stale.
    pub fn fail(&mut self, token: RequestToken, message: impl Into<String>) -> bool {
        if token != self.token {
            return false;
        }
        self.state = Slot::Rejected {
            message: message.into(),
        };
        true
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        match &self.state {
            Slot::Idle => LoadStatus::Idle,
            Slot::Pending { .. } => LoadStatus::Pending,
            Slot::Fulfilled(_) => LoadStatus::Fulfilled,
            Slot::Rejected { .. } => LoadStatus::Rejected,
        }
    }

    /// The fulfilled value. `Some` only when the most recent fetch
    /// succeeded.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            Slot::Fulfilled(value) => Some(value),
            Slot::Idle | Slot::Pending { .. } | Slot::Rejected { .. } => None,
        }
    }

    /// The last known value: the fulfilled value, or the stale value kept
    /// while a refresh is in flight.
    #[must_use]
    pub fn retained(&self) -> Option<&T> {
        match &self.state {
            Slot::Fulfilled(value) => Some(value),
            Slot::Pending { stale } => stale.as_ref(),
            Slot::Idle | Slot::Rejected { .. } => None,
        }
    }

    /// The failure message. `Some` only when the most recent fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            Slot::Rejected { message } => Some(message.as_str()),
            Slot::Idle | Slot::Pending { .. } | Slot::Fulfilled(_) => None,
        }
    }

    /// The most recently issued request token.
    #[must_use]
    pub const fn token(&self) -> RequestToken {
        self.token
    }

    /// True before the first fetch.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.status() == LoadStatus::Idle
    }

    /// True while a fetch is in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status() == LoadStatus::Pending
    }

    /// True when the most recent fetch succeeded.
    #[must_use]
    pub fn is_fulfilled(&self) -> bool {
        self.status() == LoadStatus::Fulfilled
    }

    /// True when the most recent fetch failed.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.status() == LoadStatus::Rejected
    }
}
