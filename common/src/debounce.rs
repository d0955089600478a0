use std::time::Duration;

/// Quiet period the storefront search box waits for before filtering.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(400);

/// Identifies one scheduled update. Only the most recent ticket can settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
struct Pending {
    ticket: Ticket,
    deadline: Duration,
}

/// Single-slot deferred update.
///
/// `raw` follows every push immediately; `settled` only catches up once the
/// raw value has stayed unchanged for the quiet period. Each push cancels the
/// previous pending update, so at most one is outstanding.
///
/// Times are offsets from an arbitrary caller-chosen origin, which keeps the
/// type usable on targets without a monotonic clock.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    quiet: Duration,
    raw: T,
    settled: T,
    pending: Option<Pending>,
    next_ticket: u64,
}

impl<T: Clone + Default> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(T::default(), DEFAULT_QUIET_PERIOD)
    }
}

impl<T: Clone> Debounce<T> {
    pub fn new(initial: T, quiet: Duration) -> Self {
        Self {
            quiet,
            raw: initial.clone(),
            settled: initial,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Latest input, possibly not yet settled.
    pub fn raw(&self) -> &T {
        &self.raw
    }

    /// Value downstream consumers should use.
    pub fn value(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the outstanding update becomes due, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Record new input at `now`, replacing any pending update. An update
    /// already due by `now` settles first.
    pub fn push(&mut self, value: T, now: Duration) -> Ticket {
        self.poll(now);
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.raw = value;
        self.pending = Some(Pending {
            ticket,
            deadline: now + self.quiet,
        });
        ticket
    }

    /// Settle the pending update if its deadline has been reached.
    /// Returns `true` if a pending value was applied.
    pub fn poll(&mut self, now: Duration) -> bool {
        let due = matches!(&self.pending, Some(p) if now >= p.deadline);
        if due {
            self.settle();
        }
        due
    }

    /// Called by a timer that already slept the quiet period for `ticket`.
    /// A ticket superseded by a later push is ignored.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        let current = matches!(&self.pending, Some(p) if p.ticket == ticket);
        if current {
            self.settle();
        }
        current
    }

    /// Drop any pending update and force both values to `value`.
    pub fn reset(&mut self, value: T) {
        self.pending = None;
        self.raw = value.clone();
        self.settled = value;
    }

    fn settle(&mut self) {
        self.pending = None;
        self.settled = self.raw.clone();
    }
}
