use crate::errors::config_error::ConfigError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageIdConfig {
    #[serde(default)]
    pub render: RenderConfig,
}

/// Controls how [`PageId::render`](crate::page_id::PageId::render) writes an unset ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Text emitted for an unset ID. Empty by default, like the `Display` form.
    pub unset_placeholder: String,
}

impl PageIdConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let cfg = Self::parse(&text, Some(&path))?;
        tracing::debug!(path = %path.display(), "page id config loaded");
        Ok(cfg)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, None)
    }

    /// Deserializes and validates `text`. `path` only labels parse errors.
    fn parse(text: &str, path: Option<&Path>) -> Result<Self, ConfigError> {
        let cfg: PageIdConfig = toml::from_str(text).map_err(|e| ConfigError::ParseToml {
            path: path.map(Path::to_path_buf),
            source: e,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // The placeholder ends up inline in templates.
        if self.render.unset_placeholder.contains(['\n', '\r']) {
            return Err(ConfigError::Invalid {
                message: "render.unset_placeholder must be a single line".to_string(),
            });
        }
        Ok(())
    }
}
