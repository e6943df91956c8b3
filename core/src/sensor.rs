use serde::Deserialize;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorId(Uuid);

impl SensorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SensorId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SensorId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SensorType {
    Door,
    Window,
    Motion,
}

/// A door, window or motion sensor known to the panel.
///
/// Identity is the [`SensorId`]; two sensors with the same name are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sensor {
    id: SensorId,
    name: String,
    sensor_type: SensorType,
    #[serde(default)]
    active: bool,
}

impl Sensor {
    /// New sensors start inactive.
    pub fn new(name: impl Into<String>, sensor_type: SensorType) -> Self {
        Self {
            id: SensorId::new(),
            name: name.into(),
            sensor_type,
            active: false,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn id(&self) -> SensorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

// Panel listing order: name, then type. The id and flag only break ties so
// the order agrees with `Eq`.
impl Ord for Sensor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.sensor_type.cmp(&other.sensor_type))
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.active.cmp(&other.active))
    }
}

impl PartialOrd for Sensor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_sensor_is_inactive_with_unique_id() {
        let a = Sensor::new("Front door", SensorType::Door);
        let b = Sensor::new("Front door", SensorType::Door);
        assert!(!a.active());
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn sensors_sort_by_name_then_type() {
        let mut sensors = vec![
            Sensor::new("Kitchen", SensorType::Window),
            Sensor::new("Hall", SensorType::Motion),
            Sensor::new("Kitchen", SensorType::Door),
        ];
        sensors.sort();
        let listing: Vec<(&str, SensorType)> = sensors
            .iter()
            .map(|s| (s.name(), s.sensor_type()))
            .collect();
        assert_eq!(
            listing,
            vec![
                ("Hall", SensorType::Motion),
                ("Kitchen", SensorType::Door),
                ("Kitchen", SensorType::Window),
            ]
        );
    }

    #[test]
    fn sensor_type_displays_kebab_case() {
        assert_eq!(SensorType::Motion.to_string(), "motion");
    }
}
