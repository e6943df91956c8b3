//! CatPoint security panel core.
//!
//! The [`SecurityService`] turns sensor toggles, arming changes and camera
//! frames into an [`AlarmStatus`], persisting through a [`SecurityRepository`]
//! and fanning each change out to registered [`StatusListener`]s. Storage,
//! image analysis and presentation are collaborators supplied by the caller;
//! the crate ships in-memory and fake implementations for tests and the CLI.

pub mod classifier;
pub mod config;
pub mod error;
pub mod event;
pub mod listener;
pub mod policy;
pub mod repository;
pub mod sensor;
pub mod service;
pub mod status;

pub use classifier::DynamicImage;
pub use classifier::FakeImageClassifier;
pub use classifier::FixedImageClassifier;
pub use classifier::ImageClassifier;
pub use config::ConfigError;
pub use config::DEFAULT_CONFIDENCE_THRESHOLD;
pub use config::SecurityConfig;
pub use error::RepositoryError;
pub use error::SecurityError;
pub use event::EventRecorder;
pub use event::SecurityEvent;
pub use listener::ListenerRegistry;
pub use listener::StatusListener;
pub use repository::InMemorySecurityRepository;
pub use repository::SecurityRepository;
pub use sensor::Sensor;
pub use sensor::SensorId;
pub use sensor::SensorType;
pub use service::SecurityService;
pub use service::SharedSecurityService;
pub use status::AlarmStatus;
pub use status::ArmingStatus;
