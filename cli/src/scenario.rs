//! Scripted panel sessions.
//!
//! A scenario file lists the sensors installed on the panel and a sequence of
//! steps (arming changes, sensor toggles, camera frames). Each step is applied
//! to a fresh in-memory panel and reported as one JSON line.

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use catpoint_core::AlarmStatus;
use catpoint_core::ArmingStatus;
use catpoint_core::DynamicImage;
use catpoint_core::EventRecorder;
use catpoint_core::ImageClassifier;
use catpoint_core::InMemorySecurityRepository;
use catpoint_core::SecurityConfig;
use catpoint_core::SecurityEvent;
use catpoint_core::SecurityRepository;
use catpoint_core::SecurityService;
use catpoint_core::Sensor;
use catpoint_core::SensorType;
use catpoint_core::classifier::blank_frame;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub sensors: Vec<SensorSpec>,
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
    /// Directory that relative image paths resolve against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensorSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case", deny_unknown_fields)]
pub enum ScenarioStep {
    Arm {
        status: ArmingStatus,
    },
    Sensor {
        name: String,
        active: bool,
    },
    Camera {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: usize,
    #[serde(flatten)]
    pub action: ScenarioStep,
    pub events: Vec<SecurityEvent>,
    pub alarm_status: AlarmStatus,
    pub arming_status: ArmingStatus,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        let mut scenario = Self::parse(&raw)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        scenario.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(scenario)
    }

    /// Sensor names must be unique so that steps can address them.
    pub fn parse(raw: &str) -> Result<Self> {
        let scenario: Self = toml::from_str(raw)?;
        let mut names = HashSet::new();
        for spec in &scenario.sensors {
            if !names.insert(spec.name.as_str()) {
                bail!("duplicate sensor name '{}'", spec.name);
            }
        }
        Ok(scenario)
    }
}

/// Applies every step in order, writing one JSON report line per step.
/// Stops at the first failing step.
pub fn run_scenario<C, W>(
    scenario: &Scenario,
    config: SecurityConfig,
    classifier: C,
    out: &mut W,
) -> Result<Vec<StepReport>>
where
    C: ImageClassifier,
    W: Write,
{
    let sensors = scenario
        .sensors
        .iter()
        .map(|spec| Sensor::new(spec.name.clone(), spec.sensor_type).with_active(spec.active));
    let repository = InMemorySecurityRepository::with_sensors(sensors);
    let mut service = SecurityService::with_config(repository, classifier, config);
    let recorder = Arc::new(EventRecorder::new());
    service.add_status_listener(recorder.clone());

    let mut reports = Vec::with_capacity(scenario.steps.len());
    for (idx, step) in scenario.steps.iter().enumerate() {
        let number = idx + 1;
        apply_step(&mut service, step, &scenario.base_dir)
            .with_context(|| format!("step {number} ({}) failed", step_label(step)))?;
        let report = StepReport {
            step: number,
            action: step.clone(),
            events: recorder.take_events(),
            alarm_status: service.alarm_status(),
            arming_status: service.arming_status(),
        };
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
        reports.push(report);
    }
    Ok(reports)
}

fn apply_step<R, C>(
    service: &mut SecurityService<R, C>,
    step: &ScenarioStep,
    base_dir: &Path,
) -> Result<()>
where
    R: SecurityRepository,
    C: ImageClassifier,
{
    match step {
        ScenarioStep::Arm { status } => service.set_arming_status(*status)?,
        ScenarioStep::Sensor { name, active } => {
            let Some(sensor) = service.sensors().into_iter().find(|s| s.name() == name) else {
                bail!("unknown sensor '{name}'");
            };
            service.change_sensor_activation_status(&sensor, *active)?;
        }
        ScenarioStep::Camera { image } => {
            let frame = load_frame(image.as_deref(), base_dir)?;
            service.process_image(&frame)?;
        }
    }
    Ok(())
}

fn load_frame(image: Option<&Path>, base_dir: &Path) -> Result<DynamicImage> {
    let Some(path) = image else {
        return Ok(blank_frame());
    };
    let path = base_dir.join(path);
    image::open(&path).with_context(|| format!("failed to decode camera frame {}", path.display()))
}

fn step_label(step: &ScenarioStep) -> &'static str {
    match step {
        ScenarioStep::Arm { .. } => "arm",
        ScenarioStep::Sensor { .. } => "sensor",
        ScenarioStep::Camera { .. } => "camera",
    }
}
