use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Basic handler trait which can be used to control computations.
pub trait ComputationHandler {
    /// Initial call to start this handler.
    fn started(&mut self) {}

    /// Returns `true` if this handler is aborted. Usually, this means that the
    /// calculation will also abort.
    fn aborted(&self) -> bool {
        false
    }
}

/// A no-operation handler. This handler does never abort or interrupt a
/// calculation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NopHandler;

impl ComputationHandler for NopHandler {}

/// A handler which aborts as soon as its shared flag is set. Clones share
/// the flag, so a computation running on another thread can be cancelled
/// through a clone.
#[derive(Clone, Debug, Default)]
pub struct CancellationHandler {
    canceled: Arc<AtomicBool>,
}

impl CancellationHandler {
    /// Constructs a new handler which is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels all computations using this handler or one of its clones.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Release);
    }

    /// Returns `true` if [`CancellationHandler::cancel`] was called.
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Acquire)
    }
}

impl ComputationHandler for CancellationHandler {
    fn aborted(&self) -> bool {
        self.is_canceled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_is_shared() {
        let handler = CancellationHandler::new();
        let clone = handler.clone();
        assert!(!clone.aborted());
        std::thread::spawn(move || handler.cancel()).join().unwrap();
        assert!(clone.aborted());
        assert!(!NopHandler.aborted());
    }
}
