use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config of type `TConfig`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config_serializer,
            config_content_provider,
            config: Mutex::new(None),
        }
    }

    /// Falls back to `TConfig::default()` when nothing is stored yet.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized = self.config_serializer.serialize(config)?;
        self.config_content_provider.set_config_content(&serialized)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct DepthConfig {
        search_depth: usize,
    }

    impl Default for DepthConfig {
        fn default() -> Self {
            Self { search_depth: 9 }
        }
    }

    impl Validate for DepthConfig {
        fn validate(&self) -> Result<(), String> {
            crate::config::check_range("search_depth", self.search_depth, 1, 9)
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<MemoryContentConfigProvider, DepthConfig> {
        ConfigManager::new(
            MemoryContentConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_gives_default() {
        assert_eq!(manager(None).get_config().unwrap(), DepthConfig::default());
    }

    #[test]
    fn test_stored_content_is_parsed() {
        let config = manager(Some("search_depth: 6\n")).get_config().unwrap();
        assert_eq!(config.search_depth, 6);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let error = manager(Some("search_depth: 12\n")).get_config().unwrap_err();
        assert!(error.starts_with("Config validation error"));
        assert!(manager(Some("search_depth: [")).get_config().is_err());
    }

    #[test]
    fn test_set_config_validates_and_caches() {
        let manager = manager(None);
        assert!(manager.set_config(&DepthConfig { search_depth: 0 }).is_err());

        manager.set_config(&DepthConfig { search_depth: 4 }).unwrap();
        assert_eq!(manager.get_config().unwrap().search_depth, 4);
    }
}
