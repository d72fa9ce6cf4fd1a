//! Frame-coalesced event handling.

/// At-most-one-pending-frame gate for scroll and resize handlers.
///
/// Event handlers fire far more often than the display refreshes. The gate
/// admits one scheduled recomputation at a time: the first event between
/// frames wins a schedule, the rest are dropped, and the recomputation that
/// eventually runs reads the latest state at the frame boundary.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a recomputation. Returns `true` when the caller should
    /// schedule a frame; `false` when one is already pending.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the scheduled frame as run, re-arming the gate.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_schedules() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(gate.is_pending());
    }

    #[test]
    fn test_rapid_events_coalesce() {
        // Scenario E: two events within one frame -> one recomputation
        let mut gate = FrameGate::new();
        let mut scheduled = 0;
        for _ in 0..2 {
            if gate.request() {
                scheduled += 1;
            }
        }
        assert_eq!(scheduled, 1);

        gate.complete();
        assert!(gate.request());
    }
}
