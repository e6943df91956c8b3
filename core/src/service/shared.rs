use super::SecurityService;
use crate::classifier::DynamicImage;
use crate::classifier::ImageClassifier;
use crate::error::SecurityError;
use crate::listener::StatusListener;
use crate::repository::SecurityRepository;
use crate::sensor::Sensor;
use crate::status::AlarmStatus;
use crate::status::ArmingStatus;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

/// Cloneable handle that serializes access to one [`SecurityService`].
///
/// Every call holds the lock for the whole operation, so concurrent callers
/// never observe an arming status that is stale relative to the alarm write.
pub struct SharedSecurityService<R, C>(Arc<Mutex<SecurityService<R, C>>>);

impl<R, C> Clone for SharedSecurityService<R, C> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<R, C> SharedSecurityService<R, C>
where
    R: SecurityRepository,
    C: ImageClassifier,
{
    pub fn new(service: SecurityService<R, C>) -> Self {
        Self(Arc::new(Mutex::new(service)))
    }

    /// Runs `f` inside a single critical section.
    pub fn with<T>(&self, f: impl FnOnce(&mut SecurityService<R, C>) -> T) -> T {
        f(&mut self.lock())
    }

    pub fn add_status_listener(&self, listener: Arc<dyn StatusListener>) -> bool {
        self.lock().add_status_listener(listener)
    }

    pub fn set_arming_status(&self, status: ArmingStatus) -> Result<(), SecurityError> {
        self.lock().set_arming_status(status)
    }

    pub fn change_sensor_activation_status(
        &self,
        sensor: &Sensor,
        active: bool,
    ) -> Result<Sensor, SecurityError> {
        self.lock().change_sensor_activation_status(sensor, active)
    }

    pub fn process_image(&self, image: &DynamicImage) -> Result<bool, SecurityError> {
        self.lock().process_image(image)
    }

    pub fn alarm_status(&self) -> AlarmStatus {
        self.lock().alarm_status()
    }

    pub fn arming_status(&self) -> ArmingStatus {
        self.lock().arming_status()
    }

    fn lock(&self) -> MutexGuard<'_, SecurityService<R, C>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
