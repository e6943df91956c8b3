use crate::error::RepositoryError;
use crate::sensor::Sensor;
use crate::sensor::SensorId;
use crate::status::AlarmStatus;
use crate::status::ArmingStatus;
use std::collections::BTreeMap;

/// Durable store for sensors and panel state.
///
/// The engine treats every read as authoritative and keeps no copy of its
/// own, so implementations must return what was last written.
pub trait SecurityRepository {
    fn alarm_status(&self) -> AlarmStatus;

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<(), RepositoryError>;

    fn arming_status(&self) -> ArmingStatus;

    fn set_arming_status(&mut self, status: ArmingStatus) -> Result<(), RepositoryError>;

    fn sensors(&self) -> Vec<Sensor>;

    fn add_sensor(&mut self, sensor: Sensor) -> Result<(), RepositoryError>;

    fn remove_sensor(&mut self, id: SensorId) -> Result<(), RepositoryError>;

    fn update_sensor(&mut self, sensor: &Sensor) -> Result<(), RepositoryError>;

    fn sensor(&self, id: SensorId) -> Option<Sensor> {
        self.sensors().into_iter().find(|sensor| sensor.id() == id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySecurityRepository {
    sensors: BTreeMap<SensorId, Sensor>,
    alarm_status: AlarmStatus,
    arming_status: ArmingStatus,
}

impl InMemorySecurityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sensors(sensors: impl IntoIterator<Item = Sensor>) -> Self {
        Self {
            sensors: sensors.into_iter().map(|s| (s.id(), s)).collect(),
            ..Self::default()
        }
    }

    pub fn with_statuses(mut self, alarm: AlarmStatus, arming: ArmingStatus) -> Self {
        self.alarm_status = alarm;
        self.arming_status = arming;
        self
    }
}

impl SecurityRepository for InMemorySecurityRepository {
    fn alarm_status(&self) -> AlarmStatus {
        self.alarm_status
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<(), RepositoryError> {
        self.alarm_status = status;
        Ok(())
    }

    fn arming_status(&self) -> ArmingStatus {
        self.arming_status
    }

    fn set_arming_status(&mut self, status: ArmingStatus) -> Result<(), RepositoryError> {
        self.arming_status = status;
        Ok(())
    }

    fn sensors(&self) -> Vec<Sensor> {
        self.sensors.values().cloned().collect()
    }

    fn add_sensor(&mut self, sensor: Sensor) -> Result<(), RepositoryError> {
        self.sensors.insert(sensor.id(), sensor);
        Ok(())
    }

    fn remove_sensor(&mut self, id: SensorId) -> Result<(), RepositoryError> {
        self.sensors
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::UnknownSensor { id })
    }

    fn update_sensor(&mut self, sensor: &Sensor) -> Result<(), RepositoryError> {
        let Some(stored) = self.sensors.get_mut(&sensor.id()) else {
            return Err(RepositoryError::UnknownSensor { id: sensor.id() });
        };
        *stored = sensor.clone();
        Ok(())
    }

    fn sensor(&self, id: SensorId) -> Option<Sensor> {
        self.sensors.get(&id).cloned()
    }
}
