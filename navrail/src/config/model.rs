use serde::{Deserialize, Serialize};

use crate::theme::ColorMode;

const CONFIG_VERSION: u8 = 1;
const DEFAULT_OWNER: &str = "Navrail Contributors";

/// Persisted application preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u8,
    /// Roles fed into route resolution.
    pub(crate) roles: Vec<String>,
    /// Copyright holder shown in the sidebar footer.
    pub(crate) owner: String,
    pub(crate) color_mode: ColorMode,
    pub(crate) sidebar_open: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            roles: vec![String::from("admin")],
            owner: String::from(DEFAULT_OWNER),
            color_mode: ColorMode::Dark,
            sidebar_open: true,
        }
    }
}
