use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::domains::extraction::{
    ExtractionSettings, DEFAULT_CONTENT_CHAR_LIMIT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Missing is not a startup error; scrape requests answer with a
    /// configuration error instead.
    pub anthropic_api_key: Option<String>,
    pub anthropic_base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub content_char_limit: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &String| !key.trim().is_empty();
        let anthropic_api_key = lookup("ANTHROPIC_API_KEY")
            .filter(non_blank)
            .or_else(|| lookup("VITE_ANTHROPIC_API_KEY").filter(non_blank));

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "3001".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            anthropic_api_key,
            anthropic_base_url: lookup("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| "https://api.anthropic.com".to_string()),
            model: lookup("SCRAPE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: match lookup("SCRAPE_MAX_TOKENS") {
                Some(value) => value
                    .parse()
                    .context("SCRAPE_MAX_TOKENS must be a valid number")?,
                None => DEFAULT_MAX_TOKENS,
            },
            content_char_limit: match lookup("SCRAPE_CONTENT_LIMIT") {
                Some(value) => value
                    .parse()
                    .context("SCRAPE_CONTENT_LIMIT must be a valid number")?,
                None => DEFAULT_CONTENT_CHAR_LIMIT,
            },
        })
    }

    pub fn extraction_settings(&self) -> ExtractionSettings {
        ExtractionSettings {
            model: self.model.clone(),
            content_char_limit: self.content_char_limit,
        }
    }
}
