use crate::util::{SEPARATOR, absolutize, path_to_string};
use color_eyre::Section as _;
use color_eyre::eyre::{Result, WrapErr as _, eyre};
use std::path::{Path, PathBuf};

/// Directories read once at startup to build the replacement table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub cwd: String,
    pub home: String,
}

pub fn resolve_environment(
    cwd_override: Option<&Path>,
    home_override: Option<&Path>,
) -> Result<Environment> {
    resolve_environment_with(
        cwd_override,
        home_override,
        std::env::current_dir,
        dirs::home_dir,
    )
}

fn resolve_environment_with<F, G>(
    cwd_override: Option<&Path>,
    home_override: Option<&Path>,
    current_dir: F,
    home_dir: G,
) -> Result<Environment>
where
    F: Fn() -> std::io::Result<PathBuf>,
    G: Fn() -> Option<PathBuf>,
{
    let process_cwd = || -> Result<String> {
        let dir = current_dir()
            .wrap_err("failed to read the current working directory")
            .suggestion("Run from an existing directory or pass --cwd")?;
        path_to_string(&dir)
    };
    let root = SEPARATOR.to_string();

    let cwd = match cwd_override {
        Some(path) => resolve_override(path, &process_cwd)?,
        None => absolutize(&process_cwd()?, &root, SEPARATOR),
    };
    let home = match home_override {
        Some(path) => resolve_override(path, &process_cwd)?,
        None => {
            let home = home_dir()
                .ok_or_else(|| eyre!("missing home dir").suggestion("Set HOME or pass --home"))?;
            absolutize(&path_to_string(&home)?, &root, SEPARATOR)
        }
    };
    Ok(Environment { cwd, home })
}

fn resolve_override(path: &Path, process_cwd: &dyn Fn() -> Result<String>) -> Result<String> {
    let raw = path_to_string(path)?;
    if raw.starts_with(SEPARATOR) {
        return Ok(absolutize(&raw, &SEPARATOR.to_string(), SEPARATOR));
    }
    Ok(absolutize(&raw, &process_cwd()?, SEPARATOR))
}
