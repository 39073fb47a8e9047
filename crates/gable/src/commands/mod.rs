//! Command implementations

pub mod config;
pub mod outputs;
pub mod preview;
pub mod synth;
pub mod version;

use anyhow::Result;
use camino::Utf8Path;
use gable_aws::website::{self, StaticSite};
use gable_core::config::{GableConfig, SiteConfig};
use gable_core::hostname;
use gable_engine::Program;
use tracing::debug;

/// A fully evaluated stack: loaded configuration, resolved site settings,
/// and the validated program
pub(crate) struct Evaluation {
    pub config: GableConfig,
    pub site: SiteConfig,
    pub program: Program,
    pub stack: StaticSite,
}

/// Load configuration and declare the website stack.
///
/// The pull-request number comes from the command flag when given, falling
/// back to the PR_NUM environment variable.
pub(crate) fn evaluate(
    config_path: Option<&Utf8Path>,
    pr_flag: Option<&str>,
) -> Result<Evaluation> {
    let config = GableConfig::load(config_path)?;
    debug!("Loaded configuration from {}", config.config_path);

    let site = SiteConfig::resolve(config.bundle())?;
    let pr = pr_flag
        .map(str::to_owned)
        .or_else(hostname::pr_number_from_env);

    let mut program = Program::new(config.name());
    let stack = website::declare(&mut program, &site, pr.as_deref())?;
    program.validate()?;

    Ok(Evaluation {
        config,
        site,
        program,
        stack,
    })
}
