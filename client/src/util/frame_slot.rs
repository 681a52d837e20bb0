//! Per-frame coalescing of high-frequency input samples.
//!
//! Each input source owns one `PendingSlot`. A new sample overwrites the
//! slot's payload and asks the scheduler for a frame only if none is already
//! pending; the frame callback takes the latest payload and clears the slot.
//! At most one publish per source per frame, always with the newest sample.

#[cfg(test)]
#[path = "frame_slot_test.rs"]
mod frame_slot_test;

/// Handle returned by the scheduler for a pending frame callback.
pub type FrameHandle = i32;

/// Something that can run a source's frame callback before the next repaint.
pub trait FrameScheduler {
    /// Request one callback. `None` means no frame can be scheduled.
    fn request_frame(&self) -> Option<FrameHandle>;

    /// Drop a callback that has not run yet.
    fn cancel_frame(&self, handle: FrameHandle);
}

/// At most one unpublished sample and at most one scheduled frame.
#[derive(Debug)]
pub struct PendingSlot<T> {
    payload: Option<T>,
    handle: Option<FrameHandle>,
}

impl<T> Default for PendingSlot<T> {
    fn default() -> Self {
        Self { payload: None, handle: None }
    }
}

impl<T> PendingSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `sample` as the newest value for the next frame.
    ///
    /// Returns the sample back when no frame could be scheduled, in which
    /// case the caller publishes it immediately.
    pub fn push(&mut self, sample: T, scheduler: &impl FrameScheduler) -> Option<T> {
        self.payload = Some(sample);
        if self.handle.is_some() {
            return None;
        }
        match scheduler.request_frame() {
            Some(handle) => {
                self.handle = Some(handle);
                None
            }
            None => self.payload.take(),
        }
    }

    /// Frame callback side: take the newest sample and clear the slot.
    pub fn take_for_frame(&mut self) -> Option<T> {
        self.handle = None;
        self.payload.take()
    }

    /// Discard any unpublished sample and cancel its frame.
    pub fn cancel(&mut self, scheduler: &impl FrameScheduler) {
        if let Some(handle) = self.handle.take() {
            scheduler.cancel_frame(handle);
        }
        self.payload = None;
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }
}
