use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use trellis_attributes::escape::is_valid_name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Tag emitted when a composite or fragment needs a wrapper to carry its attributes.
    ///
    /// Defaults to `div`.
    pub wrapper_tag: String,
    /// Tag emitted when a run of text needs a wrapper to carry its attributes.
    ///
    /// Defaults to `span`.
    pub inline_wrapper_tag: String,
    /// Tag emitted for a container overlay.
    ///
    /// Defaults to `div`.
    pub container_tag: String,
    /// Tags whose layout depends on there being exactly one container level.
    ///
    /// When a modified composite renders straight into one of these with no attributes of its
    /// own, the modifier's attributes are folded onto it instead of adding a wrapper.
    ///
    /// Defaults to `["div"]`.
    pub layout_sensitive_tags: BTreeSet<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wrapper_tag: "div".to_string(),
            inline_wrapper_tag: "span".to_string(),
            container_tag: "div".to_string(),
            layout_sensitive_tags: BTreeSet::from(["div".to_string()]),
        }
    }
}

impl RenderConfig {
    /// Parses and validates a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let tags = [
            ("wrapperTag", &self.wrapper_tag),
            ("inlineWrapperTag", &self.inline_wrapper_tag),
            ("containerTag", &self.container_tag),
        ];
        let sensitive = self
            .layout_sensitive_tags
            .iter()
            .map(|tag| ("layoutSensitiveTags", tag));

        for (field, tag) in tags.into_iter().chain(sensitive) {
            if !is_valid_tag(tag) {
                return Err(ConfigError::InvalidTag {
                    field,
                    value: tag.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn is_layout_sensitive(&self, tag: &str) -> bool {
        self.layout_sensitive_tags.contains(tag)
    }
}

fn is_valid_tag(tag: &str) -> bool {
    is_valid_name(tag) && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.wrapper_tag, "div");
        assert_eq!(config.inline_wrapper_tag, "span");
        assert!(config.is_layout_sensitive("div"));
        assert!(!config.is_layout_sensitive("section"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            RenderConfig::from_json(r#"{"layoutSensitiveTags": ["div", "section"]}"#).unwrap();
        assert_eq!(config.container_tag, "div");
        assert!(config.is_layout_sensitive("section"));
    }

    #[test]
    fn test_invalid_tag_is_rejected() {
        let err = RenderConfig::from_json(r#"{"wrapperTag": "my wrapper"}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTag { field: "wrapperTag", .. }
        ));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = RenderConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
