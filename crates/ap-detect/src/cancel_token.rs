use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Stop request for a running frame loop.
///
/// Clones share state: the UI keeps one to call `cancel`, the loop keeps
/// another and checks it before every frame.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
