//! Session handle and save bookkeeping

use crate::error::{WizardError, WizardResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Cloneable view of a wizard session, usable while the controller is
/// borrowed by an in-flight save.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    saving: Arc<AtomicBool>,
    closed: Arc<watch::Sender<bool>>,
}

impl SessionHandle {
    pub(crate) fn new() -> Self {
        let (closed, _) = watch::channel(false);
        Self {
            saving: Arc::new(AtomicBool::new(false)),
            closed: Arc::new(closed),
        }
    }

    /// True while a create call is outstanding
    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::SeqCst)
    }

    /// End the session. An outstanding save resolves to
    /// [`WizardError::SessionClosed`] and its result is discarded.
    pub fn teardown(&self) {
        self.closed.send_replace(true);
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<bool> {
        self.closed.subscribe()
    }

    pub(crate) fn begin_save(&self) -> WizardResult<SaveGuard> {
        self.saving
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| WizardError::SaveInFlight)?;
        Ok(SaveGuard {
            saving: Arc::clone(&self.saving),
        })
    }
}

/// Clears the busy flag when the save completes or its future is dropped
pub(crate) struct SaveGuard {
    saving: Arc<AtomicBool>,
}

impl Drop for SaveGuard {
    fn drop(&mut self) {
        self.saving.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_clears_busy_flag() {
        let handle = SessionHandle::new();
        let observer = handle.clone();
        {
            let _guard = handle.begin_save().unwrap();
            assert!(observer.is_saving());
            assert!(matches!(handle.begin_save(), Err(WizardError::SaveInFlight)));
        }
        assert!(!observer.is_saving());
        assert!(handle.begin_save().is_ok());
    }

    #[test]
    fn test_teardown_is_shared() {
        let handle = SessionHandle::new();
        let receiver = handle.subscribe();
        handle.clone().teardown();
        assert!(handle.is_closed());
        assert!(*receiver.borrow());
    }
}
