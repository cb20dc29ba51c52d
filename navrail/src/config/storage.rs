use std::path::{Path, PathBuf};

use navrail_ui_routes::RouteCatalog;

use super::{AppConfig, ConfigError};

const CONFIG_FILE: &str = "config.json";
const ROUTES_FILE: &str = "routes.json";

/// Return the navrail configuration directory.
fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join("navrail");
    }
    std::env::temp_dir().join("navrail")
}

fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Load preferences from `path`. A missing file yields defaults.
fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        },
        Err(err) => return Err(err.into()),
    };
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Save preferences to `path` atomically.
fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let payload = serde_json::to_string_pretty(config)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, payload.as_bytes())?;
    std::fs::rename(tmp_path, path)?;
    Ok(())
}

/// Save preferences to the default location.
pub(crate) fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path(), config)
}

/// Load preferences from disk, falling back to defaults on error.
pub(crate) fn load_initial_config() -> AppConfig {
    match load_config_from(&config_path()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("failed to load config, using defaults: {err}");
            AppConfig::default()
        },
    }
}

/// Load the route catalog, falling back to built-in routes on error.
pub(crate) fn load_route_catalog() -> RouteCatalog {
    let path = config_dir().join(ROUTES_FILE);
    match navrail_ui_routes::load_catalog(&path) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::warn!(
                "failed to load route catalog {}, using built-in routes: {err}",
                path.display()
            );
            RouteCatalog::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{load_config_from, save_config_to};
    use crate::config::{AppConfig, ConfigError};
    use crate::theme::ColorMode;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("navrail-test-{}", std::process::id()))
            .join(name)
            .join("config.json")
    }

    #[test]
    fn given_missing_file_when_loading_then_defaults_are_returned() {
        let path = scratch_path("missing");

        let config = load_config_from(&path).expect("missing file is fine");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn given_saved_config_when_loading_then_values_are_restored() {
        let path = scratch_path("saved");
        let config = AppConfig {
            color_mode: ColorMode::Light,
            sidebar_open: false,
            ..AppConfig::default()
        };

        save_config_to(&path, &config).expect("config should save");
        let loaded = load_config_from(&path).expect("config should load");

        assert_eq!(loaded, config);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn given_corrupt_file_when_loading_then_json_error_is_returned() {
        let path = scratch_path("corrupt");
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).expect("scratch dir");
        }
        std::fs::write(&path, "{ not json").expect("scratch file");

        let result = load_config_from(&path);

        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
