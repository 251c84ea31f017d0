//! Configuration for the classification advisor.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::backend::{LlmBackend, ModelCapabilities, OpenAiBackend};
use crate::request::DEFAULT_RANKED_SUGGESTIONS;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// YAML could not be parsed or written
    #[error("Invalid advisor config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The configured API key variable is unset
    #[error("API key not set: environment variable {0} is empty or missing")]
    MissingApiKey(String),
}

/// Advisor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Token budget for the collaborator's reply
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Most ranked suggestions to ask for
    pub max_suggestions: usize,
    /// Backend settings
    pub backend: BackendConfig,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: 0.2,
            max_suggestions: DEFAULT_RANKED_SUGGESTIONS,
            backend: BackendConfig::default(),
        }
    }
}

impl AdvisorConfig {
    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Construct the configured backend.
    pub fn build_backend(&self) -> Result<Arc<dyn LlmBackend>, ConfigError> {
        self.backend.build().map(|b| Arc::new(b) as Arc<dyn LlmBackend>)
    }
}

/// Which OpenAI-compatible server to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendProvider {
    #[default]
    OpenAi,
    Ollama,
    Vllm,
}

impl std::str::FromStr for BackendProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "ollama" => Ok(Self::Ollama),
            "vllm" => Ok(Self::Vllm),
            other => Err(format!("unknown provider '{}' (expected openai, ollama or vllm)", other)),
        }
    }
}

impl BackendProvider {
    /// Base URL used when none is configured.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1",
            Self::Ollama => "http://localhost:11434/v1",
            Self::Vllm => "http://localhost:8000/v1",
        }
    }
}

/// Backend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Server flavour
    pub provider: BackendProvider,
    /// Override for the provider's default base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Model name
    pub model: String,
    /// Environment variable holding the API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    /// Per-request timeout (seconds)
    pub timeout_secs: u64,
    /// Whether the model accepts image inputs
    pub supports_vision: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            provider: BackendProvider::OpenAi,
            base_url: None,
            model: "gpt-4o-mini".to_string(),
            api_key_env: Some("OPENAI_API_KEY".to_string()),
            timeout_secs: 60,
            supports_vision: true,
        }
    }
}

impl BackendConfig {
    /// Effective base URL.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
    }

    /// Build the backend, reading the API key from the environment.
    pub fn build(&self) -> Result<OpenAiBackend, ConfigError> {
        let api_key = self
            .api_key_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|key| !key.trim().is_empty());

        if self.provider == BackendProvider::OpenAi && api_key.is_none() {
            let var = self.api_key_env.clone().unwrap_or_default();
            return Err(ConfigError::MissingApiKey(var));
        }

        tracing::debug!(
            provider = ?self.provider,
            base_url = %self.base_url(),
            model = %self.model,
            supports_vision = self.supports_vision,
            "Building LLM backend"
        );

        let backend = OpenAiBackend::new(self.base_url(), &self.model, api_key)
            .with_timeout(Duration::from_secs(self.timeout_secs));
        let capabilities = ModelCapabilities {
            supports_vision: self.supports_vision,
            ..backend.capabilities().clone()
        };
        Ok(backend.with_capabilities(capabilities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_round_trip_with_defaults() {
        let config = AdvisorConfig::from_yaml(
            "max_suggestions: 5\nbackend:\n  provider: ollama\n  model: llava\n",
        )
        .unwrap();

        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.backend.provider, BackendProvider::Ollama);
        assert_eq!(config.backend.base_url(), "http://localhost:11434/v1");
        assert_eq!(config.backend.timeout_secs, 60);

        let yaml = config.to_yaml().unwrap();
        assert_eq!(AdvisorConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_build_local_backend_without_key() {
        let config = BackendConfig {
            provider: BackendProvider::Vllm,
            base_url: Some("http://gpu-box:9000/v1/".to_string()),
            api_key_env: None,
            ..Default::default()
        };

        let backend = config.build().unwrap();
        assert_eq!(backend.base_url(), "http://gpu-box:9000/v1");
        assert!(backend.capabilities().supports_vision);
    }

    #[test]
    fn test_text_only_model() {
        let config = AdvisorConfig::from_yaml(
            "backend:\n  provider: ollama\n  model: llama3.2\n  supports_vision: false\n",
        )
        .unwrap();

        let backend = config.backend.build().unwrap();
        assert!(!backend.capabilities().supports_vision);
    }

    #[test]
    fn test_openai_requires_key() {
        let config = BackendConfig {
            api_key_env: Some("MADDS_TEST_KEY_THAT_IS_NEVER_SET".to_string()),
            ..Default::default()
        };

        match config.build() {
            Err(ConfigError::MissingApiKey(var)) => {
                assert_eq!(var, "MADDS_TEST_KEY_THAT_IS_NEVER_SET")
            }
            other => panic!("expected missing key, got {other:?}"),
        }
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("Ollama".parse::<BackendProvider>(), Ok(BackendProvider::Ollama));
        assert_eq!("vllm".parse::<BackendProvider>(), Ok(BackendProvider::Vllm));
        assert!("bedrock".parse::<BackendProvider>().is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(AdvisorConfig::from_yaml("backend: [1, 2").is_err());
    }
}
