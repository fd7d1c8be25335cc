use serde::{
    Deserialize,
    Serialize,
};

pub const SETTINGS_FILE: &str = "settings.json";

/// Environment variable that overrides the configured word list location.
pub const SOURCE_ENV_VAR: &str = "KIOKU_SOURCE";

pub const DEFAULT_SOURCE: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR_s11QpNmzgSpUm_dJHcw7ljLd-omtgCKheM24lb_IfrXtnEXLaqCeNdGBKkcwELI3sH509CcfzRoX/pub?output=tsv&gid=0";

pub const DEFAULT_STATUSES_FILE: &str = "flashcardStatuses.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    /// URL or local path of the tab-separated word list.
    pub source: String,
    pub statuses_file: String,
    pub dark_mode: bool,
    pub zoom: f32,
    /// Font file with CJK glyphs, registered ahead of the egui defaults.
    pub font_path: Option<String>,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            statuses_file: DEFAULT_STATUSES_FILE.to_string(),
            dark_mode: true,
            zoom: 1.5,
            font_path: None,
        }
    }
}

impl SettingsData {
    /// Applies `KIOKU_SOURCE` on top of the stored settings.
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_source_override(std::env::var(SOURCE_ENV_VAR).ok());
        self
    }

    fn apply_source_override(&mut self, value: Option<String>) {
        if let Some(source) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            log::info!("Using word list from {}", SOURCE_ENV_VAR);
            self.source = source;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: SettingsData = serde_json::from_str(r#"{"source": "words.tsv"}"#).unwrap();
        assert_eq!(settings.source, "words.tsv");
        assert_eq!(settings.statuses_file, DEFAULT_STATUSES_FILE);
        assert!(settings.font_path.is_none());
    }

    #[test]
    fn test_source_override() {
        let mut settings = SettingsData::default();
        settings.apply_source_override(Some("   ".to_string()));
        assert_eq!(settings.source, DEFAULT_SOURCE);

        settings.apply_source_override(Some(" /tmp/words.tsv ".to_string()));
        assert_eq!(settings.source, "/tmp/words.tsv");
    }
}
