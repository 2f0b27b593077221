//! Fixed-cadence frame scheduling.
//!
//! Times are plain milliseconds from any monotonic origin, so the pacer is
//! deterministic and can be driven by tests without sleeping.

#[derive(Debug, Clone)]
pub struct FramePacer {
    interval_ms: u64,
    next_due_ms: Option<u64>,
    dropped: u64,
}

impl FramePacer {
    /// `interval_ms` of zero is treated as 1.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due_ms: None,
            dropped: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Frames skipped because the caller fell behind.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Decide whether a frame is due at `now_ms`.
    ///
    /// - The first call is always due.
    /// - Afterwards a frame is due once per interval, on a fixed grid.
    /// - When more than one interval was missed, the missed ticks are counted as
    ///   dropped and the grid moves forward instead of bursting to catch up.
    pub fn should_advance(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_due_ms else {
            self.next_due_ms = Some(now_ms + self.interval_ms);
            return true;
        };

        if now_ms < due {
            return false;
        }

        let missed = (now_ms - due) / self.interval_ms;
        if missed > 0 {
            self.dropped += missed;
            tracing::trace!(missed, "frame pacer fell behind");
        }
        self.next_due_ms = Some(due + (missed + 1) * self.interval_ms);
        true
    }

    /// How long the caller may wait before the next frame is due.
    pub fn wait_ms(&self, now_ms: u64) -> u64 {
        self.next_due_ms
            .map(|due| due.saturating_sub(now_ms))
            .unwrap_or(0)
    }

    /// Forget the schedule; the next call to `should_advance` is due.
    pub fn reset(&mut self) {
        self.next_due_ms = None;
    }
}
