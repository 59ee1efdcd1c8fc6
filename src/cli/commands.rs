use anyhow::Result;
use std::path::PathBuf;

use super::args::Args;
use crate::config::{ConfigurationError, ConfigurationFileLocator};
use crate::detection::{detect_build_agent, ProcessEnvironment};

/// Exit codes for the command line tool
pub mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const CONFIG_ERROR: u8 = 2;
}

/// Map a top-level error to the process exit code
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ConfigurationError>().is_some() {
        exit_codes::CONFIG_ERROR
    } else {
        exit_codes::GENERAL_ERROR
    }
}

/// Locate the configuration file and print its path
pub fn locate(args: &Args) -> Result<()> {
    let working = match &args.work_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let project_root: PathBuf = args.project_root.clone().unwrap_or_else(|| working.clone());

    if let Some(agent) = detect_build_agent(&ProcessEnvironment) {
        tracing::info!(
            "Running on {} (branch: {})",
            agent.as_str(),
            agent
                .current_branch(&ProcessEnvironment)
                .unwrap_or_else(|| "unknown".to_string())
        );
    }

    let locator = ConfigurationFileLocator::with_os_fs(args.locator_options());
    if args.verify {
        locator.verify(Some(working.as_path()), Some(project_root.as_path()))?;
    }

    let found = match locator.get_configuration_file(Some(working.as_path()))? {
        Some(path) => Some(path),
        None => locator.get_configuration_file(Some(project_root.as_path()))?,
    };

    match found {
        Some(path) => println!("{}", path.display()),
        None => eprintln!("no configuration file found"),
    }
    Ok(())
}
