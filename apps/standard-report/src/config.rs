//! Configuration discovery and effective settings resolution.
//!
//! standard-report reads `standard-report.toml|yaml|yml` from the repository
//! root (or closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config.
//! Defaults:
//! - `input`: stdin
//! - `output`: `human`
//! - `relative_paths`: true
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILES: [&str; 3] = [
    "standard-report.toml",
    "standard-report.yaml",
    "standard-report.yml",
];

const OUTPUT_MODES: [&str; 2] = ["human", "json"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `standard-report.toml|yaml`.
pub struct ReportConfig {
    /// Path to the linting engine's JSON report, relative to the repo root
    pub input: Option<String>,
    pub output: Option<String>,
    pub relative_paths: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// `None` reads the report from stdin
    pub input: Option<String>,
    pub output: String,
    pub relative_paths: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a config file or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|name| cur.join(name).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ReportConfig` from the first config file present under `root`.
///
/// A missing file yields `Ok(None)`; an unreadable or invalid one is an error.
pub fn load_config(root: &Path) -> Result<Option<ReportConfig>> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<ReportConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<ReportConfig>(&s).map_err(|e| e.to_string())
        };
        let cfg = parsed.map_err(|msg| Error::Config {
            message: format!("{}: {}", path.to_string_lossy(), msg),
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        return Ok(Some(cfg));
    }
    Ok(None)
}

/// Absolute directory the repo root search starts from.
///
/// Relative `--repo-root` values and the default are anchored at the current
/// dir so the upward walk can reach its ancestors.
pub fn start_dir(cli_repo_root: Option<&str>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|source| Error::Io {
        path: ".".into(),
        source,
    })?;
    Ok(match cli_repo_root {
        Some(s) => cwd.join(s),
        None => cwd,
    })
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_input: Option<&str>,
    cli_output: Option<&str>,
    cli_relative_paths: Option<bool>,
) -> Result<Effective> {
    let start = start_dir(cli_repo_root)?;
    let repo_root = detect_repo_root(&start);
    let cfg = match load_config(&repo_root)? {
        Some(cfg) => cfg,
        None => {
            tracing::debug!(root = %repo_root.display(), "no config found; using defaults");
            ReportConfig::default()
        }
    };

    // Config-file inputs are relative to the repo root; CLI inputs to the cwd
    let input = match cli_input {
        Some(s) => Some(s.to_string()),
        None => cfg
            .input
            .filter(|s| s != "-")
            .map(|s| repo_root.join(s).to_string_lossy().to_string()),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if !OUTPUT_MODES.contains(&output.as_str()) {
        return Err(Error::Config {
            message: format!("unknown output mode '{}' (expected human|json)", output),
        });
    }

    let relative_paths = cli_relative_paths
        .or(cfg.relative_paths)
        .unwrap_or(true);

    Ok(Effective {
        repo_root,
        input,
        output,
        relative_paths,
    })
}
