//! One-shot timers

/// Fires once at `due_ms`, carrying the session generation it was armed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    pub due_ms: u64,
    pub generation: u64,
}

impl OneShot {
    pub fn arm(now_ms: u64, delay_ms: u64, generation: u64) -> Self {
        Self {
            due_ms: now_ms + delay_ms,
            generation,
        }
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.due_ms
    }

    /// Take the timer out of `slot` if it is due
    pub fn take_due(slot: &mut Option<OneShot>, now_ms: u64) -> Option<OneShot> {
        if slot.is_some_and(|t| t.is_due(now_ms)) {
            slot.take()
        } else {
            None
        }
    }
}
