//! Platform abstraction layer
//!
//! Frame scheduling shared by the browser glue. The browser hands out an
//! animation-frame handle per request; `FrameLoop` tracks the one pending
//! request and a generation token so that a loop can be cancelled and re-armed
//! without two tick streams ever driving the same session.

/// Single repeating tick source
#[derive(Debug, Default)]
pub struct FrameLoop {
    /// Handle of the pending frame request, if any
    pending: Option<i32>,
    /// Token of the live loop; callbacks carrying an older one are stale
    generation: u64,
    running: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending frame and start a fresh loop.
    ///
    /// Returns the handle to cancel with the platform (if one was pending) and
    /// the token the new loop's callbacks must carry.
    pub fn arm(&mut self) -> (Option<i32>, u64) {
        let stale = self.cancel();
        self.running = true;
        (stale, self.generation)
    }

    /// Stop the loop. Calling it on a stopped loop is a no-op.
    pub fn cancel(&mut self) -> Option<i32> {
        if self.running || self.pending.is_some() {
            self.generation += 1;
        }
        self.running = false;
        self.pending.take()
    }

    /// Stop rescheduling after the current frame (terminal game states)
    pub fn stop(&mut self) {
        self.running = false;
        self.pending = None;
    }

    /// Record the handle of a frame request made for `generation`
    pub fn scheduled(&mut self, generation: u64, handle: i32) {
        if self.is_current(generation) {
            self.pending = Some(handle);
        }
    }

    /// A frame callback fired; returns whether it belongs to the live loop
    pub fn fire(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.pending = None;
        true
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.running && generation == self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_and_fire() {
        let mut frames = FrameLoop::new();
        assert!(!frames.is_running());

        let (stale, token) = frames.arm();
        assert_eq!(stale, None);
        frames.scheduled(token, 7);
        assert!(frames.fire(token));
        assert!(frames.is_running());
    }

    #[test]
    fn test_rearm_cancels_pending_and_invalidates_old_callbacks() {
        let mut frames = FrameLoop::new();
        let (_, first) = frames.arm();
        frames.scheduled(first, 3);

        let (stale, second) = frames.arm();
        assert_eq!(stale, Some(3));
        assert_ne!(first, second);
        assert!(!frames.fire(first));
        assert!(frames.fire(second));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut frames = FrameLoop::new();
        let (_, token) = frames.arm();
        frames.scheduled(token, 1);
        assert_eq!(frames.cancel(), Some(1));
        assert_eq!(frames.cancel(), None);
        assert_eq!(frames.cancel(), None);
        assert!(!frames.is_running());
        assert!(!frames.fire(token));
    }

    #[test]
    fn test_stop_drops_further_frames() {
        let mut frames = FrameLoop::new();
        let (_, token) = frames.arm();
        frames.scheduled(token, 9);
        assert!(frames.fire(token));
        frames.stop();
        assert!(!frames.is_current(token));
        // A late request for the stopped loop is not recorded
        frames.scheduled(token, 10);
        assert_eq!(frames.cancel(), None);
    }
}
