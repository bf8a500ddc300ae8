//! Configuration loading and provider factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use studentgen_core::engine::GenerationConfig;
use studentgen_core::traits::{TextGenerator, STUDENT_PROFILE_PROMPT};

use crate::gemini::GeminiProvider;
use crate::mock::MockProvider;
use crate::openai::OpenAiProvider;

/// Environment variables consulted for the API key, in priority order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["STUDENTGEN_API_KEY", "MY_API_KEY"];

/// Configuration for the text-generation backend.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    Gemini {
        #[serde(default)]
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
    },
    OpenAI {
        #[serde(default)]
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
    },
    Mock {
        #[serde(default)]
        responses: Vec<String>,
    },
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderConfig::Gemini {
                api_key: _,
                base_url,
            } => f
                .debug_struct("Gemini")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .finish(),
            ProviderConfig::OpenAI {
                api_key: _,
                base_url,
            } => f
                .debug_struct("OpenAI")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .finish(),
            ProviderConfig::Mock { responses } => f
                .debug_struct("Mock")
                .field("responses", &responses.len())
                .finish(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::Gemini {
            api_key: String::new(),
            base_url: None,
        }
    }
}

impl ProviderConfig {
    fn api_key_mut(&mut self) -> Option<&mut String> {
        match self {
            ProviderConfig::Gemini { api_key, .. } | ProviderConfig::OpenAI { api_key, .. } => {
                Some(api_key)
            }
            ProviderConfig::Mock { .. } => None,
        }
    }
}

/// Top-level studentgen configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentgenConfig {
    /// Text-generation backend.
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Model identifier sent to the provider.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature. Higher values give more varied students.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Max tokens per generated profile.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// SQLite database file holding the student table.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}
fn default_temperature() -> f64 {
    1.0
}
fn default_max_tokens() -> u32 {
    1024
}
fn default_timeout_secs() -> u64 {
    120
}
fn default_database_path() -> PathBuf {
    PathBuf::from("student.db")
}

impl Default for StudentgenConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            database_path: default_database_path(),
        }
    }
}

impl StudentgenConfig {
    /// Engine settings derived from this configuration.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            prompt: STUDENT_PROFILE_PROMPT.to_string(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(offset) = result[from..].find("${") {
        let start = from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result.replace_range(start..start + end + 1, &value);
        // Substituted text is never rescanned.
        from = start + value.len();
    }
    result
}

/// Resolve env vars in a provider config.
fn resolve_provider_config(config: &ProviderConfig) -> ProviderConfig {
    match config {
        ProviderConfig::Gemini { api_key, base_url } => ProviderConfig::Gemini {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
        },
        ProviderConfig::OpenAI { api_key, base_url } => ProviderConfig::OpenAI {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
        },
        ProviderConfig::Mock { responses } => ProviderConfig::Mock {
            responses: responses.clone(),
        },
    }
}

/// Override the provider API key from the first set variable in
/// [`API_KEY_ENV_VARS`].
fn apply_api_key_override(config: &mut StudentgenConfig, lookup: impl Fn(&str) -> Option<String>) {
    let Some(key) = API_KEY_ENV_VARS
        .iter()
        .find_map(|var| lookup(var).filter(|v| !v.trim().is_empty()))
    else {
        return;
    };
    if let Some(api_key) = config.provider.api_key_mut() {
        *api_key = key;
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `studentgen.toml` in the current directory
/// 2. `~/.config/studentgen/config.toml`
///
/// Environment variable overrides: `STUDENTGEN_API_KEY`, then `MY_API_KEY`.
pub fn load_config() -> Result<StudentgenConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<StudentgenConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("studentgen.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<StudentgenConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => StudentgenConfig::default(),
    };

    config.provider = resolve_provider_config(&config.provider);
    apply_api_key_override(&mut config, |var| std::env::var(var).ok());

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studentgen"))
}

/// Create a text generator from configuration.
pub fn create_provider(config: &StudentgenConfig) -> Result<Box<dyn TextGenerator>> {
    match &config.provider {
        ProviderConfig::Gemini { api_key, base_url } => {
            ensure_api_key(api_key, "gemini")?;
            Ok(Box::new(GeminiProvider::new(
                api_key,
                base_url.clone(),
                config.timeout_secs,
            )?))
        }
        ProviderConfig::OpenAI { api_key, base_url } => {
            ensure_api_key(api_key, "openai")?;
            Ok(Box::new(OpenAiProvider::new(
                api_key,
                base_url.clone(),
                config.timeout_secs,
            )?))
        }
        ProviderConfig::Mock { responses } => Ok(Box::new(MockProvider::new(responses.clone()))),
    }
}

fn ensure_api_key(api_key: &str, provider: &str) -> Result<()> {
    anyhow::ensure!(
        !api_key.trim().is_empty(),
        "no API key configured for provider '{provider}'; set {} or provider.api_key in studentgen.toml",
        API_KEY_ENV_VARS[0]
    );
    Ok(())
}
