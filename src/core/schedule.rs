use std::cell::Cell;

// Single-threaded scheduling state shared between browser callbacks.

/// Coalesces bursts of events into at most one pending animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a frame as pending. Returns false if one already was, in which
    /// case the caller must not request another frame.
    #[inline]
    pub fn arm(&self) -> bool {
        !self.pending.replace(true)
    }

    #[inline]
    pub fn release(&self) {
        self.pending.set(false);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Arm the gate and run `request` if it was idle. `request` returns
    /// whether the frame was actually scheduled; on failure the gate is
    /// released so a later event can retry.
    pub fn request(&self, request: impl FnOnce() -> bool) -> bool {
        if !self.arm() {
            return false;
        }
        if request() {
            true
        } else {
            self.release();
            false
        }
    }
}

/// Keeps a single outstanding timer handle; every rearm cancels the previous
/// timer so only the last event of a burst fires.
#[derive(Debug, Default)]
pub struct Debounce {
    handle: Cell<Option<i32>>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the pending timer (if any) via `cancel` and store the handle
    /// returned by `schedule`.
    pub fn rearm(&self, cancel: impl FnOnce(i32), schedule: impl FnOnce() -> Option<i32>) {
        if let Some(previous) = self.handle.take() {
            cancel(previous);
        }
        self.handle.set(schedule());
    }

    /// Called from the timer callback once it fires.
    #[inline]
    pub fn fired(&self) {
        self.handle.set(None);
    }

    #[inline]
    pub fn pending(&self) -> Option<i32> {
        self.handle.get()
    }
}
