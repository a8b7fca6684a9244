use crate::error::{Error, Result};
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_INPUT: &str = "subjects.csv";
pub const DEFAULT_OUTPUT: &str = "subjects_normalized.csv";
pub const DEFAULT_EXCLUDED_STATUS: &str = "Deprecated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackMode {
    /// Unmatched subjects go to the remote classifier.
    Enabled,
    /// Unmatched subjects are only logged and left blank.
    Disabled,
}

impl std::fmt::Display for FallbackMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackMode::Enabled => write!(f, "enabled"),
            FallbackMode::Disabled => write!(f, "disabled (log only)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAI,
    Claude,
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" | "gpt" => Ok(ProviderKind::OpenAI),
            "claude" | "anthropic" => Ok(ProviderKind::Claude),
            other => Err(Error::Config(format!("Unknown fallback provider: {}", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub fallback_enabled: bool,
    pub provider: ProviderKind,
    pub model: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub anthropic_base_url: Option<String>,
    pub requests_per_minute: Option<u32>,
    pub excluded_statuses: Vec<String>,
    pub delimiter: u8,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let input_path = var("SUBJECTS_INPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

        let output_path = var("SUBJECTS_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let fallback_enabled = var("FALLBACK_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let provider = match var("FALLBACK_PROVIDER") {
            Some(v) => v.parse()?,
            None => ProviderKind::OpenAI,
        };

        let requests_per_minute = var("FALLBACK_REQUESTS_PER_MINUTE").and_then(|v| v.parse().ok());

        let excluded_statuses = var("EXCLUDED_STATUSES")
            .map(|v| parse_list(&v))
            .unwrap_or_else(|| vec![DEFAULT_EXCLUDED_STATUS.to_string()]);

        let delimiter = match var("CSV_DELIMITER") {
            Some(v) => parse_delimiter(&v)?,
            None => b',',
        };

        Ok(Self {
            input_path,
            output_path,
            fallback_enabled,
            provider,
            model: var("FALLBACK_MODEL"),
            openai_api_key: var("OPENAI_API_KEY"),
            anthropic_api_key: var("ANTHROPIC_API_KEY"),
            openai_base_url: var("OPENAI_BASE_URL"),
            anthropic_base_url: var("ANTHROPIC_BASE_URL"),
            requests_per_minute,
            excluded_statuses,
            delimiter,
        })
    }

    pub fn fallback_mode(&self) -> FallbackMode {
        if self.fallback_enabled {
            FallbackMode::Enabled
        } else {
            FallbackMode::Disabled
        }
    }

    /// Credential for the configured provider.
    pub fn api_key(&self) -> Result<&str> {
        let (key, name) = match self.provider {
            ProviderKind::OpenAI => (&self.openai_api_key, "OPENAI_API_KEY"),
            ProviderKind::Claude => (&self.anthropic_api_key, "ANTHROPIC_API_KEY"),
        };
        key.as_deref().ok_or_else(|| {
            Error::Config(format!(
                "{} environment variable not set but fallback is enabled",
                name
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.fallback_enabled {
            self.api_key()?;
        }
        if self.excluded_statuses.is_empty() {
            tracing::warn!("No excluded statuses configured; every row will be emitted");
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub fallback_mode: FallbackMode,
    pub excluded_statuses: Vec<String>,
    pub show_progress: bool,
}

impl PipelineConfig {
    pub fn log_only() -> Self {
        Self {
            fallback_mode: FallbackMode::Disabled,
            excluded_statuses: vec![DEFAULT_EXCLUDED_STATUS.to_string()],
            show_progress: false,
        }
    }

    pub fn with_fallback() -> Self {
        Self {
            fallback_mode: FallbackMode::Enabled,
            ..Self::log_only()
        }
    }

    pub fn is_excluded(&self, status: &str) -> bool {
        self.excluded_statuses.iter().any(|s| s == status)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::log_only()
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            fallback_mode: config.fallback_mode(),
            excluded_statuses: config.excluded_statuses.clone(),
            show_progress: true,
        }
    }
}

pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "\\t" | "tab" | "\t" => Ok(b'\t'),
        v if v.len() == 1 && v.is_ascii() => Ok(v.as_bytes()[0]),
        v => Err(Error::Config(format!(
            "Delimiter must be a single ASCII character, got {:?}",
            v
        ))),
    }
}
