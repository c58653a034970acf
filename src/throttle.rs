/// Leading-edge debounce over caller-supplied timestamps.
///
/// The first event of a burst fires; later events are suppressed until
/// `quiet_ms` pass with no events at all. Every event, fired or not,
/// restarts the quiet window.
///
/// Each event also gets a ticket. A timer armed for `quiet_ms` after an event
/// can ask [`LeadingDebounce::trailing_due`] whether that event was the last
/// of its burst, so the final position of a burst is still handled.
#[derive(Clone, Debug)]
pub struct LeadingDebounce {
    quiet_ms: f64,
    last_event: Option<f64>,
    seq: u64,
}

impl LeadingDebounce {
    pub fn new(quiet_ms: f64) -> Self {
        Self { quiet_ms, last_event: None, seq: 0 }
    }

    pub fn quiet_ms(&self) -> f64 {
        self.quiet_ms
    }

    /// Record an event at `now` and report whether it should run.
    pub fn fire(&mut self, now: f64) -> bool {
        let call_now = match self.last_event {
            None => true,
            Some(prev) => now - prev >= self.quiet_ms,
        };
        self.last_event = Some(now);
        self.seq += 1;
        call_now
    }

    /// Ticket of the most recent event.
    pub fn ticket(&self) -> u64 {
        self.seq
    }

    /// Whether no event arrived after the one identified by `ticket`.
    pub fn trailing_due(&self, ticket: u64) -> bool {
        ticket == self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_fires() {
        let mut d = LeadingDebounce::new(50.0);
        assert!(d.fire(0.0));
    }

    #[test]
    fn burst_is_suppressed_until_quiet() {
        let mut d = LeadingDebounce::new(50.0);
        assert!(d.fire(0.0));
        assert!(!d.fire(16.0));
        assert!(!d.fire(32.0));
        // 48ms since last event: still inside the window
        assert!(!d.fire(80.0));
        assert!(d.fire(130.0));
    }

    #[test]
    fn continuous_scrolling_fires_leading_once() {
        let mut d = LeadingDebounce::new(50.0);
        let fired = (0..100).filter(|i| d.fire(*i as f64 * 10.0)).count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn only_last_event_of_burst_is_trailing() {
        let mut d = LeadingDebounce::new(50.0);
        let tickets: Vec<u64> = (0..5)
            .map(|i| {
                d.fire(i as f64 * 10.0);
                d.ticket()
            })
            .collect();
        let due: Vec<bool> = tickets.iter().map(|t| d.trailing_due(*t)).collect();
        assert_eq!(due, [false, false, false, false, true]);
    }
}
