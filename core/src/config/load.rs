use std::path::Path;

use crate::errors::ConfigError;

use super::types::{AppConfig, LaunchPolicy};

pub const DEFAULT_CONFIG_FILE: &str = "launchpad.toml";

/// Loads `launchpad.toml` from the working directory if present, else defaults.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    load(None)
}

/// Loads configuration, applies `LAUNCHPAD_*` env overrides, then validates.
///
/// An explicit `path` must exist; the implicit default file is optional.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut cfg = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound(p.display().to_string()));
            }
            read_file(p)?
        }
        None => {
            let p = Path::new(DEFAULT_CONFIG_FILE);
            if p.exists() {
                read_file(p)?
            } else {
                AppConfig::default()
            }
        }
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    validate(&cfg)?;
    Ok(cfg)
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse(e.into()))?;
    toml::from_str::<AppConfig>(&s).map_err(|e| ConfigError::Parse(e.into()))
}

pub(crate) fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get("LAUNCHPAD_POLICY") {
        cfg.launch.policy = v
            .parse::<LaunchPolicy>()
            .map_err(|e| ConfigError::EnvInvalid {
                key: "LAUNCHPAD_POLICY".into(),
                source: anyhow::anyhow!(e),
            })?;
    }
    if let Some(v) = get("LAUNCHPAD_INTERPRETER") {
        cfg.launch.interpreter = v;
    }
    if let Some(v) = get("LAUNCHPAD_SCRIPT") {
        cfg.launch.script = v;
    }
    if let Some(v) = get("LAUNCHPAD_APP_URL") {
        cfg.pages.app_url = v;
    }
    if let Some(v) = get("LAUNCHPAD_STATUS_PATH") {
        cfg.routes.status_path = v;
    }
    if let Some(v) = get("LAUNCHPAD_DASHBOARD_PORT") {
        cfg.launch.dashboard.port =
            v.trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::EnvInvalid {
                    key: "LAUNCHPAD_DASHBOARD_PORT".into(),
                    source: e.into(),
                })?;
    }

    Ok(())
}

pub(crate) fn validate(cfg: &AppConfig) -> Result<(), ConfigError> {
    if cfg.launch.interpreter.trim().is_empty() {
        return Err(ConfigError::Validation("launch.interpreter is empty".into()));
    }
    if cfg.launch.script.trim().is_empty() {
        return Err(ConfigError::Validation("launch.script is empty".into()));
    }
    if !cfg.routes.status_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "routes.status_path must start with '/': {}",
            cfg.routes.status_path
        )));
    }
    if cfg.launch.dashboard.port == 0 {
        return Err(ConfigError::Validation("launch.dashboard.port must be non-zero".into()));
    }
    if cfg.pages.refresh_secs > 60 {
        return Err(ConfigError::Validation(format!(
            "pages.refresh_secs too large: {}",
            cfg.pages.refresh_secs
        )));
    }
    Ok(())
}
