//! User settings for the tracker
//!
//! Manages user preferences: currency display, the list of payers, the
//! default date filter and the categories a session starts with.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::{default_categories, Category, DateFilter};

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in amounts, e.g. "$"
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Currency code shown in column headers, e.g. "SGD"
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// People who can pay for an expense; the first is the form default
    #[serde(default = "default_payers")]
    pub payers: Vec<String>,

    /// Date filter selected when a session starts
    #[serde(default)]
    pub default_filter: DateFilter,

    /// Categories a session starts with
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_currency_code() -> String {
    "SGD".to_string()
}

fn default_payers() -> Vec<String> {
    vec!["Eamon".to_string(), "Siang Nee".to_string()]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency_symbol(),
            currency_code: default_currency_code(),
            payers: default_payers(),
            default_filter: DateFilter::default(),
            categories: default_categories(),
        }
    }
}

impl Settings {
    /// Check the settings are usable
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.payers.iter().all(|p| p.trim().is_empty()) {
            return Err(TrackerError::Config("At least one payer is required".into()));
        }

        for (i, category) in self.categories.iter().enumerate() {
            category.validate().map_err(|e| {
                TrackerError::Config(format!("Category '{}': {}", category.name, e))
            })?;

            if self.categories[..i].iter().any(|c| c.name == category.name) {
                return Err(TrackerError::Config(format!(
                    "Category '{}' is listed twice",
                    category.name
                )));
            }
        }

        Ok(())
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_code, "SGD");
        assert_eq!(settings.payers[0], "Eamon");
        assert_eq!(settings.payers.len(), 2);
        assert_eq!(settings.default_filter, DateFilter::Custom);
        assert_eq!(settings.categories.len(), 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_filter = DateFilter::LastMonth;
        settings.payers = vec!["Alex".into()];
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_filter, DateFilter::LastMonth);
        assert_eq!(loaded.payers[0], "Alex");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_code": "EUR"}"#).unwrap();
        assert_eq!(settings.currency_code, "EUR");
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.categories.len(), 5);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_duplicates_and_bad_budgets() {
        let mut settings = Settings::default();
        settings.categories.push(settings.categories[0].clone());
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.categories[1].budget = Money::zero();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.payers.clear();
        assert!(settings.validate().is_err());
    }
}
