use crate::status::AlarmStatus;
use std::fmt;
use std::sync::Arc;

/// Observer of panel state changes.
///
/// Notifications are delivered synchronously while the engine is mid-operation.
/// Listeners must not call back into the engine that notified them; with a
/// [`SharedSecurityService`](crate::SharedSecurityService) doing so deadlocks.
pub trait StatusListener: Send + Sync {
    fn on_alarm_status_changed(&self, status: AlarmStatus) -> anyhow::Result<()>;

    fn on_cat_detected(&self, _present: bool) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Set of listeners owned by one engine, keyed by allocation identity.
#[derive(Default, Clone)]
pub struct ListenerRegistry {
    listeners: Vec<Arc<dyn StatusListener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the same listener is already registered.
    pub fn add(&mut self, listener: Arc<dyn StatusListener>) -> bool {
        if self.position(&listener).is_some() {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    pub fn remove(&mut self, listener: &Arc<dyn StatusListener>) -> bool {
        match self.position(listener) {
            Some(idx) => {
                self.listeners.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Stops at the first failing listener.
    pub fn notify_alarm_status(&self, status: AlarmStatus) -> anyhow::Result<()> {
        self.listeners
            .iter()
            .try_for_each(|listener| listener.on_alarm_status_changed(status))
    }

    pub fn notify_cat_detected(&self, present: bool) -> anyhow::Result<()> {
        self.listeners
            .iter()
            .try_for_each(|listener| listener.on_cat_detected(present))
    }

    fn position(&self, listener: &Arc<dyn StatusListener>) -> Option<usize> {
        let target = Arc::as_ptr(listener).cast::<()>();
        self.listeners
            .iter()
            .position(|existing| Arc::as_ptr(existing).cast::<()>() == target)
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
