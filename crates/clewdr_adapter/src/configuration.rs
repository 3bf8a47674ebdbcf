use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::clients::{ClewdrTransformer, Transformer};
use crate::errors::ConfigurationError;
use crate::transforms::HeaderSet;
use crate::{CHAT_COMPLETIONS_PATH, CLEWDR_TRANSFORMER_NAME};

fn default_provider_interface() -> String {
    CLEWDR_TRANSFORMER_NAME.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClewdrProvider {
    pub name: String,
    #[serde(default = "default_provider_interface")]
    pub provider_interface: String,
    pub access_key: Option<String>,
    pub endpoint: Option<String>,
    pub default: Option<bool>,
}

impl ClewdrProvider {
    /// Full chat completions URL, e.g. `http://127.0.0.1:8484/v1/chat/completions`
    pub fn chat_completions_url(&self) -> Option<String> {
        self.endpoint
            .as_ref()
            .map(|endpoint| format!("{}{}", endpoint.trim_end_matches('/'), CHAT_COMPLETIONS_PATH))
    }

    /// Outbound headers for this provider, with its access key as the default bearer token.
    pub fn compose_headers(&self, headers: &HeaderSet) -> HeaderSet {
        ClewdrTransformer.transform_headers(headers, self.access_key.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    pub version: String,
    pub model_providers: Vec<ClewdrProvider>,
}

impl Configuration {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigurationError> {
        let config: Configuration = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.model_providers.is_empty() {
            return Err(ConfigurationError::EmptySource);
        }

        let mut names = HashSet::new();
        let mut has_default = false;
        for provider in &self.model_providers {
            if provider.provider_interface != CLEWDR_TRANSFORMER_NAME {
                return Err(ConfigurationError::UnsupportedInterface {
                    name: provider.name.clone(),
                    interface: provider.provider_interface.clone(),
                });
            }
            if !names.insert(provider.name.as_str()) {
                return Err(ConfigurationError::DuplicateName(provider.name.clone()));
            }
            if provider.default.unwrap_or_default() {
                if has_default {
                    return Err(ConfigurationError::MoreThanOneDefault);
                }
                has_default = true;
            }
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ClewdrProvider> {
        self.model_providers
            .iter()
            .find(|provider| provider.name == name)
    }

    /// The provider marked `default: true`, otherwise the first one listed.
    pub fn default_provider(&self) -> Option<&ClewdrProvider> {
        self.model_providers
            .iter()
            .find(|provider| provider.default.unwrap_or_default())
            .or_else(|| self.model_providers.first())
    }
}
