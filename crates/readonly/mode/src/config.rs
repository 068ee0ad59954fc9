//! Read-only mode settings
//!
//! Settings live in a TOML file. A missing file means defaults: mode off,
//! built-in lists, stock messages.
//!
//! ```toml
//! enabled = true
//! message = "Maintenance in progress."
//! redirect_url = "/maintenance"
//! forms_allowed = ["contact_form"]
//! forms_viewonly = ["node_edit_form"]
//! ```

use crate::defaults::{default_forms_allowed, default_forms_viewonly};
use crate::error::{ReadOnlyError, Result};
use crate::form::FormSet;
use crate::mode::ModeSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default notice shown while read-only mode is active
pub const DEFAULT_MESSAGE: &str =
    "The site is currently in read-only mode. Changes cannot be saved.";

/// Default notice for a submission that was refused
pub const DEFAULT_FORM_NOT_SAVED_MESSAGE: &str =
    "The form could not be saved because the site is in read-only mode.";

/// Site settings for read-only mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOnlySettings {
    /// Whether read-only mode is on
    pub enabled: bool,

    /// Notice shown on restricted pages
    pub message: String,

    /// Notice shown when a submission is refused
    pub form_not_saved_message: String,

    /// Where rejected requests are redirected
    pub redirect_url: Option<String>,

    /// Extra forms with full access
    pub forms_allowed: Vec<String>,

    /// Extra view-only forms
    pub forms_viewonly: Vec<String>,

    /// Whether the built-in lists seed the filter
    pub use_builtin_defaults: bool,
}

impl Default for ReadOnlySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            message: DEFAULT_MESSAGE.to_string(),
            form_not_saved_message: DEFAULT_FORM_NOT_SAVED_MESSAGE.to_string(),
            redirect_url: None,
            forms_allowed: Vec::new(),
            forms_viewonly: Vec::new(),
            use_builtin_defaults: true,
        }
    }
}

impl ReadOnlySettings {
    /// Load settings from a file, falling back to defaults if it is missing
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            debug!(path = %config_path.display(), "Loading read-only settings");
            let contents = std::fs::read_to_string(&config_path)?;
            Self::from_toml_str(&contents)
        } else {
            debug!(path = %config_path.display(), "No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: ReadOnlySettings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Get the default settings file path
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ReadOnlyError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("readonly").join("config.toml"))
    }

    /// Check settings for values that cannot be acted on
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.redirect_url {
            if url.trim().is_empty() {
                return Err(ReadOnlyError::Config(
                    "redirect_url is set but empty".into(),
                ));
            }
        }
        Ok(())
    }

    /// Seed for the allow list: built-in defaults plus configured extras
    pub fn seed_allowed(&self) -> FormSet {
        let mut forms = if self.use_builtin_defaults {
            default_forms_allowed()
        } else {
            FormSet::new()
        };
        forms.extend(&self.forms_allowed);
        forms
    }

    /// Seed for the view-only list: built-in defaults plus configured extras
    pub fn seed_viewonly(&self) -> FormSet {
        let mut forms = if self.use_builtin_defaults {
            default_forms_viewonly()
        } else {
            FormSet::new()
        };
        forms.extend(&self.forms_viewonly);
        forms
    }
}

impl ModeSource for ReadOnlySettings {
    fn is_read_only(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ReadOnlySettings::default();
        assert!(!settings.enabled);
        assert!(settings.use_builtin_defaults);
        assert!(settings.redirect_url.is_none());
        assert_eq!(settings.message, DEFAULT_MESSAGE);
    }

    #[test]
    fn test_load_missing_config() {
        let settings = ReadOnlySettings::load(Some(Path::new("/nonexistent/path/config.toml")))
            .unwrap();
        assert_eq!(settings, ReadOnlySettings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "readonly-settings-{}.toml",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, "enabled = true\nforms_allowed = [\"contact_form\"]\n").unwrap();

        let settings = ReadOnlySettings::load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(settings.enabled);
        assert_eq!(settings.forms_allowed, vec!["contact_form".to_string()]);
        assert_eq!(settings.message, DEFAULT_MESSAGE);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = ReadOnlySettings::from_toml_str(
            r#"
            enabled = true
            message = "Back soon."
            forms_viewonly = ["node_edit_form"]
            "#,
        )
        .unwrap();

        assert!(settings.is_read_only());
        assert_eq!(settings.message, "Back soon.");
        assert_eq!(settings.form_not_saved_message, DEFAULT_FORM_NOT_SAVED_MESSAGE);
        assert!(settings.seed_viewonly().contains("node_edit_form"));
        assert!(settings.seed_viewonly().contains("views_form_user_admin_page"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ReadOnlySettings::from_toml_str("enabled = maybe").unwrap_err();
        assert!(matches!(err, ReadOnlyError::Parse(_)));
    }

    #[test]
    fn test_blank_redirect_rejected() {
        let err = ReadOnlySettings::from_toml_str("redirect_url = \"  \"").unwrap_err();
        assert!(matches!(err, ReadOnlyError::Config(_)));
    }

    #[test]
    fn test_seed_without_builtin_defaults() {
        let settings = ReadOnlySettings {
            use_builtin_defaults: false,
            forms_allowed: vec!["contact_form".into()],
            ..Default::default()
        };

        let seed = settings.seed_allowed();
        assert_eq!(seed.len(), 1);
        assert!(seed.contains("contact_form"));
        assert!(settings.seed_viewonly().is_empty());
    }
}
