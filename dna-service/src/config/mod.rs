use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default model for the explanation endpoint.
const DEFAULT_TEXT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, Deserialize)]
pub struct DnaConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// An absent key disables the explain endpoint instead of failing startup.
    pub api_key: Option<String>,
    pub model: String,
}

impl DnaConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(DnaConfig {
            common,
            llm: LlmConfig {
                api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
            },
        })
    }
}
