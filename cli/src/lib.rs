pub mod scenario;

use anyhow::Result;
use catpoint_core::FakeImageClassifier;
use catpoint_core::FixedImageClassifier;
use catpoint_core::ImageClassifier;
use catpoint_core::SecurityConfig;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use scenario::Scenario;
use scenario::run_scenario;
use serde::Serialize;
use std::io;
use std::path::Path;
use std::path::PathBuf;

/// CatPoint security panel simulator.
#[derive(Debug, Parser)]
#[command(name = "catpoint", version)]
pub struct Cli {
    /// TOML file with engine settings.
    #[arg(long = "config", value_name = "FILE", env = "CATPOINT_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: CatpointCommand,
}

#[derive(Debug, Subcommand)]
pub enum CatpointCommand {
    /// Replay a scenario file and print one JSON report per step.
    Run {
        #[arg(value_name = "SCENARIO")]
        scenario: PathBuf,
        /// Verdict source for camera steps.
        #[arg(long = "classifier", value_enum, default_value_t = ClassifierArg::Random)]
        classifier: ClassifierArg,
        /// Override the configured confidence threshold (percent).
        #[arg(long = "threshold", value_name = "PERCENT")]
        threshold: Option<f32>,
    },
    /// Print the effective engine configuration.
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassifierArg {
    /// Guess at random, like an untrained model.
    Random,
    /// Every frame shows a cat.
    Cat,
    /// No frame shows a cat.
    NoCat,
}

impl ClassifierArg {
    fn into_classifier(self) -> Box<dyn ImageClassifier> {
        match self {
            ClassifierArg::Random => Box::new(FakeImageClassifier),
            ClassifierArg::Cat => Box::new(FixedImageClassifier(true)),
            ClassifierArg::NoCat => Box::new(FixedImageClassifier(false)),
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        CatpointCommand::Run {
            scenario,
            classifier,
            threshold,
        } => {
            let config = match threshold {
                Some(threshold) => config.with_confidence_threshold(threshold)?,
                None => config,
            };
            let scenario = Scenario::load(&scenario)?;
            tracing::info!(
                steps = scenario.steps.len(),
                sensors = scenario.sensors.len(),
                ?classifier,
                "running scenario"
            );
            let mut stdout = io::stdout().lock();
            run_scenario(&scenario, config, classifier.into_classifier(), &mut stdout)?;
            Ok(())
        }
        CatpointCommand::Config => print_json(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<SecurityConfig> {
    match path {
        Some(path) => Ok(SecurityConfig::load(path)?),
        None => Ok(SecurityConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
