use crate::listener::StatusListener;
use crate::status::AlarmStatus;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

/// Notification emitted to listeners, in serializable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SecurityEvent {
    AlarmStatusChanged { status: AlarmStatus },
    CatDetected { present: bool },
}

/// Listener that keeps every notification it receives.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Mutex<Vec<SecurityEvent>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SecurityEvent> {
        self.lock().clone()
    }

    pub fn take_events(&self) -> Vec<SecurityEvent> {
        std::mem::take(&mut *self.lock())
    }

    /// Alarm statuses in the order they were announced.
    pub fn alarm_statuses(&self) -> Vec<AlarmStatus> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                SecurityEvent::AlarmStatusChanged { status } => Some(*status),
                SecurityEvent::CatDetected { .. } => None,
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SecurityEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StatusListener for EventRecorder {
    fn on_alarm_status_changed(&self, status: AlarmStatus) -> anyhow::Result<()> {
        self.lock().push(SecurityEvent::AlarmStatusChanged { status });
        Ok(())
    }

    fn on_cat_detected(&self, present: bool) -> anyhow::Result<()> {
        self.lock().push(SecurityEvent::CatDetected { present });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn events_serialize_with_type_tag() {
        let json = serde_json::to_string(&SecurityEvent::AlarmStatusChanged {
            status: AlarmStatus::PendingAlarm,
        })
        .expect("serialize");
        assert_eq!(
            json,
            r#"{"type":"alarm-status-changed","status":"pending-alarm"}"#
        );
        let json =
            serde_json::to_string(&SecurityEvent::CatDetected { present: true }).expect("serialize");
        assert_eq!(json, r#"{"type":"cat-detected","present":true}"#);
    }

    #[test]
    fn take_events_drains() {
        let recorder = EventRecorder::new();
        recorder.on_cat_detected(false).expect("record");
        recorder
            .on_alarm_status_changed(AlarmStatus::NoAlarm)
            .expect("record");
        assert_eq!(recorder.alarm_statuses(), vec![AlarmStatus::NoAlarm]);
        assert_eq!(recorder.take_events().len(), 2);
        assert!(recorder.events().is_empty());
    }
}
