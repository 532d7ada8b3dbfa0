//! Console settings: API endpoint plus the static site configuration the
//! console ships with. Loaded once at startup and passed explicitly to
//! whatever needs it; nothing here mutates after load.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub site: SiteSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    pub title: String,
    pub logo: String,
    pub show_settings: bool,
    pub tags_view: bool,
    pub fixed_header: bool,
    pub sidebar_logo: bool,
    /// Which environments surface the error-log panel.
    pub error_log: String,
    /// RSA public key used to encrypt credentials before submission.
    pub public_key: String,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        path: String,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the binary
const DEFAULT_SETTINGS: &str = r#"
[api]
base_url = "http://localhost:8088"

[site]
title = "GoTribe-Admin"
logo = "assets/sidebar-logo/logo.png"
show_settings = true
tags_view = true
fixed_header = false
sidebar_logo = true
error_log = "production"
public_key = """
-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA2+/BbwvSv2288ez8cWL9
4Vq1fgaLzcr6+wqPUfsmITnj56ougIrQZPgpdWRCcgKApyHO6S+BYbqiDYlAJxD5
+D7U0G9oZaPLvBJk/zsaU8wm6abW56L/DPrEuqw//0SWgagps4N41D8gMVLd5ThE
K4IH97/w6RyHvk/5B9djIjhVXid+56EsyZ+14ktNsI7Zsk5u0hLCBzAq2xQqKCAD
KSi0wZTIFGltzgDnzCuehWdHlL5Rdp2gJRcwkcOsXA9CRwEJtWFJAcc+2YhssZ/N
8k4eibBKIpS9dxgIR0aoOTma578lRZvRche4JKOdTxf/lfgc7oct9eoSj9bJL+bH
vwIDAQAB
-----END PUBLIC KEY-----
"""
"#;

/// Load settings from a `config.toml` next to the executable, falling
/// back to the embedded defaults when none is present.
pub fn load_settings() -> Result<Settings, SettingsError> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("loading settings from: {}", config_path.display());
                let contents =
                    std::fs::read_to_string(&config_path).map_err(|source| SettingsError::Io {
                        source,
                        path: config_path.display().to_string(),
                    })?;
                let settings: Settings = toml::from_str(&contents)?;
                return Ok(settings);
            }
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("using default embedded settings");
    let settings: Settings = toml::from_str(DEFAULT_SETTINGS)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_load() {
        let settings: Settings = toml::from_str(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:8088");
        assert_eq!(settings.site.title, "GoTribe-Admin");
        assert!(settings.site.tags_view);
        assert!(!settings.site.fixed_header);
        assert!(settings.site.public_key.contains("BEGIN PUBLIC KEY"));
    }
}
