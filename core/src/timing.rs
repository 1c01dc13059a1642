//! Clock-free bookkeeping behind debounce, throttle and timed UI resets.
//!
//! Callers own the actual timers; these types only decide whether a timer
//! that fired is still the one that counts.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Hands out tickets; only the most recent one is current.
#[derive(Clone, Debug, Default)]
pub struct TicketCounter {
    latest: u64,
}

impl TicketCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// Trailing-edge debounce: every [`DebounceGate::arm`] supersedes the
/// previous one, and only the last armed ticket may fire.
#[derive(Clone, Debug)]
pub struct DebounceGate {
    wait_ms: u32,
    tickets: TicketCounter,
    pending: bool,
}

impl DebounceGate {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            tickets: TicketCounter::new(),
            pending: false,
        }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn arm(&mut self) -> Ticket {
        self.pending = true;
        self.tickets.issue()
    }

    /// True exactly once, for the latest armed ticket.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending && self.tickets.is_current(ticket) {
            self.pending = false;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        self.pending = false;
        self.tickets.issue();
    }
}

/// Leading-edge throttle over a caller-supplied millisecond clock.
#[derive(Clone, Debug)]
pub struct ThrottleGate {
    limit_ms: f64,
    reopens_at: Option<f64>,
}

impl ThrottleGate {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms: f64::from(limit_ms),
            reopens_at: None,
        }
    }

    /// Accepts the call if the gate is open at `now_ms`, closing it for
    /// `limit_ms`. Rejected calls are dropped for good.
    pub fn try_pass(&mut self, now_ms: f64) -> bool {
        if let Some(reopens_at) = self.reopens_at {
            if now_ms < reopens_at {
                return false;
            }
        }
        self.reopens_at = Some(now_ms + self.limit_ms);
        true
    }
}

/// Remembers what a control looked like before a temporary label swap, so
/// overlapping swaps (double clicks) still restore the original.
#[derive(Clone, Debug, Default)]
pub struct FeedbackSlot {
    original: Option<String>,
    tickets: TicketCounter,
}

impl FeedbackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.original.is_some()
    }

    /// Starts (or extends) a feedback window. `current` is only kept when no
    /// window is already open, since it would be the temporary label.
    pub fn begin(&mut self, current: String) -> Ticket {
        if self.original.is_none() {
            self.original = Some(current);
        }
        self.tickets.issue()
    }

    /// The label to restore, if `ticket` is the latest window.
    pub fn finish(&mut self, ticket: Ticket) -> Option<String> {
        if !self.tickets.is_current(ticket) {
            return None;
        }
        self.original.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut counter = TicketCounter::new();
        let first = counter.issue();
        let second = counter.issue();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }

    #[test]
    fn debounce_fires_once_for_latest() {
        let mut gate = DebounceGate::new(100);
        let stale = gate.arm();
        let latest = gate.arm();
        assert!(!gate.fire(stale));
        assert!(gate.fire(latest));
        assert!(!gate.fire(latest));
        assert!(!gate.is_pending());
    }

    #[test]
    fn debounce_cancel_drops_pending() {
        let mut gate = DebounceGate::new(50);
        let ticket = gate.arm();
        gate.cancel();
        assert!(!gate.fire(ticket));
    }

    #[test]
    fn throttle_reopens_after_limit() {
        let mut gate = ThrottleGate::new(100);
        assert!(gate.try_pass(0.0));
        assert!(!gate.try_pass(99.0));
        assert!(gate.try_pass(100.0));
        assert!(!gate.try_pass(150.0));
    }

    #[test]
    fn feedback_restores_first_label_after_overlap() {
        let mut slot = FeedbackSlot::new();
        let first = slot.begin("Copy".to_string());
        let second = slot.begin("Copied!".to_string());
        assert_eq!(slot.finish(first), None);
        assert!(slot.is_active());
        assert_eq!(slot.finish(second).as_deref(), Some("Copy"));
        assert!(!slot.is_active());
    }
}
