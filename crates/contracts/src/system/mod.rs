//! Site-wide system configuration.

use serde::{Deserialize, Serialize};

/// The single system configuration record: site title, branding assets
/// and footer text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfigDto {
    #[serde(rename = "systemConfigID")]
    pub system_config_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub footer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSystemConfigRequest {
    pub title: String,
    pub content: String,
    pub logo: String,
    pub icon: String,
    pub footer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfigData {
    #[serde(rename = "systemConfig")]
    pub system_config: SystemConfigDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_decodes() {
        let json = r#"{"systemConfig":{"systemConfigID":"s1","title":"GoTribe-Admin","logo":"/logo.png","footer":"© GoTribe"}}"#;
        let data: SystemConfigData = serde_json::from_str(json).unwrap();
        assert_eq!(data.system_config.title, "GoTribe-Admin");
    }
}
