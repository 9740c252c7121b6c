//! Single-slot handoff of magnitude buffers between threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Latest-wins mailbox holding at most one completed buffer.
///
/// The producer publishes finished buffers; the frame loop takes whatever is
/// newest. An unread buffer is replaced, never queued.
#[derive(Debug, Clone, Default)]
pub struct FrameSlot {
    inner: Arc<Mutex<Option<Vec<f32>>>>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Vec<f32>>> {
        // Buffers are swapped whole, so a poisoned slot still holds a complete one
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `buffer`, returning true if it replaced one nobody had taken
    pub fn publish(&self, buffer: Vec<f32>) -> bool {
        self.lock().replace(buffer).is_some()
    }

    /// Remove and return the newest buffer, if any
    pub fn take(&self) -> Option<Vec<f32>> {
        self.lock().take()
    }
}
