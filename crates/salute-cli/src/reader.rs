use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Default profile values from salute.config.yaml.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileConfig {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub language: Option<String>,
}

/// Read the profile config from salute.config.yaml if it exists.
/// A missing or malformed file degrades to no defaults.
pub fn read_profile_config(dir_path: &Path) -> Option<ProfileConfig> {
    let config_path = dir_path.join("salute.config.yaml");
    if !config_path.exists() {
        return None;
    }

    let content = fs::read_to_string(&config_path).ok()?;
    serde_yaml::from_str(&content).ok()
}
