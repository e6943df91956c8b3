//! Alarm policy engine.
//!
//! [`SecurityService`] receives panel events (arming changes, sensor toggles,
//! camera frames), applies the rules in [`crate::policy`] against the state
//! held by a [`SecurityRepository`], and notifies every registered
//! [`StatusListener`]. Each operation runs to completion, repository writes and
//! notifications included, before returning.

mod shared;

pub use shared::SharedSecurityService;

use crate::classifier::DynamicImage;
use crate::classifier::ImageClassifier;
use crate::config::SecurityConfig;
use crate::error::SecurityError;
use crate::listener::ListenerRegistry;
use crate::listener::StatusListener;
use crate::policy;
use crate::repository::SecurityRepository;
use crate::sensor::Sensor;
use crate::sensor::SensorId;
use crate::status::AlarmStatus;
use crate::status::ArmingStatus;
use std::sync::Arc;
use tracing::debug;
use tracing::info;
use tracing::warn;

#[derive(Debug)]
pub struct SecurityService<R, C> {
    repository: R,
    classifier: C,
    listeners: ListenerRegistry,
    config: SecurityConfig,
    cat_detected: bool,
}

impl<R, C> SecurityService<R, C>
where
    R: SecurityRepository,
    C: ImageClassifier,
{
    pub fn new(repository: R, classifier: C) -> Self {
        Self::with_config(repository, classifier, SecurityConfig::default())
    }

    pub fn with_config(repository: R, classifier: C, config: SecurityConfig) -> Self {
        Self {
            repository,
            classifier,
            listeners: ListenerRegistry::new(),
            config,
            cat_detected: false,
        }
    }

    pub fn config(&self) -> &SecurityConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Last classifier verdict, consulted when the panel is armed at home.
    pub fn cat_detected_cached(&self) -> bool {
        self.cat_detected
    }

    pub fn add_status_listener(&mut self, listener: Arc<dyn StatusListener>) -> bool {
        self.listeners.add(listener)
    }

    pub fn remove_status_listener(&mut self, listener: &Arc<dyn StatusListener>) -> bool {
        self.listeners.remove(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn alarm_status(&self) -> AlarmStatus {
        self.repository.alarm_status()
    }

    pub fn arming_status(&self) -> ArmingStatus {
        self.repository.arming_status()
    }

    /// Sensors in panel listing order.
    pub fn sensors(&self) -> Vec<Sensor> {
        let mut sensors = self.repository.sensors();
        sensors.sort();
        sensors
    }

    pub fn add_sensor(&mut self, sensor: Sensor) -> Result<(), SecurityError> {
        debug!(sensor = %sensor.id(), name = sensor.name(), "adding sensor");
        self.repository.add_sensor(sensor)?;
        Ok(())
    }

    pub fn remove_sensor(&mut self, id: SensorId) -> Result<(), SecurityError> {
        if self.repository.sensor(id).is_none() {
            return Err(SecurityError::SensorNotFound { id });
        }
        debug!(sensor = %id, "removing sensor");
        self.repository.remove_sensor(id)?;
        Ok(())
    }

    /// Persists `status` and notifies every listener, even when the status
    /// did not change.
    pub fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<(), SecurityError> {
        info!(alarm = %status, "alarm status set");
        self.repository.set_alarm_status(status)?;
        self.listeners.notify_alarm_status(status).map_err(|err| {
            warn!(alarm = %status, error = %err, "status listener failed");
            SecurityError::listener(err)
        })
    }

    /// Changes the arming mode. Disarming silences the alarm; arming resets
    /// every sensor to inactive without treating the resets as sensor events.
    pub fn set_arming_status(&mut self, status: ArmingStatus) -> Result<(), SecurityError> {
        info!(arming = %status, cat = self.cat_detected, "arming status change requested");
        if let Some(forced) = policy::alarm_for_arming(status, self.cat_detected) {
            self.set_alarm_status(forced)?;
        }
        if status.is_armed() {
            self.reset_sensors()?;
        }
        self.repository.set_arming_status(status)?;
        Ok(())
    }

    /// Applies a sensor toggle. `sensor.active()` is taken as the sensor's
    /// previous state; the updated sensor is persisted and returned.
    pub fn change_sensor_activation_status(
        &mut self,
        sensor: &Sensor,
        active: bool,
    ) -> Result<Sensor, SecurityError> {
        if self.repository.sensor(sensor.id()).is_none() {
            return Err(SecurityError::SensorNotFound { id: sensor.id() });
        }

        let current = self.repository.alarm_status();
        if current != AlarmStatus::Alarm {
            if active {
                self.handle_sensor_activated(current)?;
            } else if sensor.active() {
                self.handle_sensor_deactivated(current)?;
            }
        } else {
            debug!(sensor = %sensor.id(), active, "alarm sounding, sensor change ignored");
        }

        let mut updated = sensor.clone();
        updated.set_active(active);
        self.repository.update_sensor(&updated)?;
        Ok(updated)
    }

    /// Runs the classifier over a camera frame and applies its verdict.
    pub fn process_image(&mut self, image: &DynamicImage) -> Result<bool, SecurityError> {
        let threshold = self.config.confidence_threshold;
        let present = self.classifier.contains_cat(image, threshold);
        debug!(present, threshold, "classified camera frame");
        self.cat_detected(present)?;
        Ok(present)
    }

    fn cat_detected(&mut self, present: bool) -> Result<(), SecurityError> {
        self.cat_detected = present;
        let status = policy::alarm_for_cat(present, self.repository.arming_status());
        self.set_alarm_status(status)?;
        self.listeners.notify_cat_detected(present).map_err(|err| {
            warn!(cat = present, error = %err, "status listener failed");
            SecurityError::listener(err)
        })
    }

    fn handle_sensor_activated(&mut self, current: AlarmStatus) -> Result<(), SecurityError> {
        if self.repository.arming_status() == ArmingStatus::Disarmed {
            debug!("panel disarmed, sensor trip ignored");
            return Ok(());
        }
        match policy::escalate(current) {
            Some(next) => self.set_alarm_status(next),
            None => Ok(()),
        }
    }

    fn handle_sensor_deactivated(&mut self, current: AlarmStatus) -> Result<(), SecurityError> {
        match policy::reduce(current) {
            Some(next) => self.set_alarm_status(next),
            None => Ok(()),
        }
    }

    fn reset_sensors(&mut self) -> Result<(), SecurityError> {
        for mut sensor in self.repository.sensors() {
            sensor.set_active(false);
            self.repository.update_sensor(&sensor)?;
        }
        Ok(())
    }
}
