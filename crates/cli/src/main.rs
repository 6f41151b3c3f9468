use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use dataset_check_core::{
    render_report, validate_dataset, ValidationConfig, DEFAULT_DATASET_DIR,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Takes no arguments; anything passed on the command line is ignored.
fn main() -> Result<ExitCode> {
    init_tracing();
    let root = default_dataset_root()?;
    run_check(&root)
}

fn run_check(root: &Path) -> Result<ExitCode> {
    let config = ValidationConfig::default();
    let report = validate_dataset(root, &config)
        .with_context(|| format!("failed to validate dataset at {}", root.display()))?;

    print!("{}", render_report(&report));

    if report.passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        info!("dataset check failed with {} issue(s)", report.errors.len());
        Ok(ExitCode::FAILURE)
    }
}

fn default_dataset_root() -> Result<PathBuf> {
    let exe = env::current_exe().context("failed to locate executable")?;
    Ok(dataset_root_for(&exe))
}

/// `<exe dir>/../ml_dataset`, i.e. the parent of the parent of the binary.
fn dataset_root_for(exe: &Path) -> PathBuf {
    let install_dir = exe
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new("."));
    install_dir.join(DEFAULT_DATASET_DIR)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
