use std::env;
use crate::errors::ChefError;
use crate::models::{ChannelInfo, License};

pub const DEFAULT_API_BASE_URL: &str = "https://youtube.googleapis.com/youtube/v3";

// YouTube caps maxResults at 50 on every list endpoint we call
pub const MAX_PAGE_SIZE: u32 = 50;

pub const CREATIVE_COMMONS_LICENSE: &str = "creativeCommon";

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelConfig {
    pub channel: ChannelInfo,
    pub youtube_channel_id: String,
    pub subtitle_languages: Vec<String>,
    pub page_size: u32,
    /// `status.license` value a video must carry to be ingested.
    pub license_filter: String,
    /// License attached to every ingested video.
    pub license: License,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        ChannelConfig {
            channel: ChannelInfo {
                source_domain: "learningequality.org".to_string(),
                source_id: "sushi-chef-espresso-english-en".to_string(),
                title: "Espresso English".to_string(),
                language: "en".to_string(),
                description: Some(
                    "Espresso English is a YouTube channel that features Shayna, an experienced ESL teacher who provides learners with English lessons in vocabulary, grammar and conversational English as well."
                        .to_string(),
                ),
                thumbnail: Some("thumbnail.jpg".to_string()),
            },
            youtube_channel_id: "UCKjOCfT-w4ePd98Y_g8gTqg".to_string(),
            subtitle_languages: vec!["ar".to_string()],
            page_size: MAX_PAGE_SIZE,
            license_filter: CREATIVE_COMMONS_LICENSE.to_string(),
            license: License::cc_by("Espresso English"),
        }
    }
}

impl ChannelConfig {
    /// Compiled-in channel constants with optional environment overrides.
    pub fn from_env() -> Result<Self, ChefError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ChefError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ChannelConfig::default();

        if let Some(channel_id) = lookup("YOUTUBE_CHANNEL_ID") {
            let channel_id = channel_id.trim();
            if channel_id.is_empty() {
                return Err(ChefError::InvalidConfig("YOUTUBE_CHANNEL_ID is empty".to_string()));
            }
            config.youtube_channel_id = channel_id.to_string();
        }

        if let Some(languages) = lookup("SUBTITLE_LANGUAGES") {
            config.subtitle_languages = languages
                .split(',')
                .map(str::trim)
                .filter(|lang| !lang.is_empty())
                .map(str::to_string)
                .collect();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ChefError> {
        if self.youtube_channel_id.is_empty() {
            return Err(ChefError::InvalidConfig("channel id must not be empty".to_string()));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ChefError::InvalidConfig(format!(
                "page size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }
        Ok(())
    }
}

/// Settings for talking to the API, kept apart from the channel constants.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub api_key: String,
    pub base_url: String,
    pub output_path: Option<String>,
}

impl ApiSettings {
    pub fn from_env() -> Result<Self, ChefError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ChefError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("YOUTUBE_API_TOKEN")
            .or_else(|| lookup("API_KEY"))
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ChefError::MissingConfig("YOUTUBE_API_TOKEN must be set".to_string()))?;

        let base_url = lookup("YOUTUBE_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let output_path = lookup("CHANNEL_TREE_OUTPUT").filter(|path| !path.is_empty());

        Ok(ApiSettings {
            api_key,
            base_url,
            output_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ChannelConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.youtube_channel_id, "UCKjOCfT-w4ePd98Y_g8gTqg");
        assert_eq!(config.subtitle_languages, vec!["ar"]);
        assert_eq!(config.page_size, 50);
        assert_eq!(config.license_filter, "creativeCommon");
        assert_eq!(config.license.kind, "CC BY");
    }

    #[test]
    fn test_env_overrides() {
        let config = ChannelConfig::from_lookup(lookup_from(&[
            ("YOUTUBE_CHANNEL_ID", " UC123 "),
            ("SUBTITLE_LANGUAGES", "ar, fr,,es "),
        ]))
        .unwrap();
        assert_eq!(config.youtube_channel_id, "UC123");
        assert_eq!(config.subtitle_languages, vec!["ar", "fr", "es"]);
    }

    #[test]
    fn test_empty_channel_id_rejected() {
        let result = ChannelConfig::from_lookup(lookup_from(&[("YOUTUBE_CHANNEL_ID", "  ")]));
        assert!(matches!(result, Err(ChefError::InvalidConfig(_))));
    }

    #[test]
    fn test_page_size_bounds() {
        let mut config = ChannelConfig::default();
        config.page_size = 51;
        assert!(config.validate().is_err());
        config.page_size = 0;
        assert!(config.validate().is_err());
        config.page_size = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_settings() {
        let settings = ApiSettings::from_lookup(lookup_from(&[
            ("API_KEY", "fallback"),
            ("YOUTUBE_API_BASE_URL", "http://127.0.0.1:8080/"),
        ]))
        .unwrap();
        assert_eq!(settings.api_key, "fallback");
        assert_eq!(settings.base_url, "http://127.0.0.1:8080");
        assert!(settings.output_path.is_none());

        let settings = ApiSettings::from_lookup(lookup_from(&[
            ("YOUTUBE_API_TOKEN", "primary"),
            ("API_KEY", "fallback"),
        ]))
        .unwrap();
        assert_eq!(settings.api_key, "primary");
        assert_eq!(settings.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_missing_token() {
        let result = ApiSettings::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(ChefError::MissingConfig(_))));
    }
}
