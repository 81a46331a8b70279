use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SwitcherConfig {
    // Language
    pub default_language: Language,
    pub strict_codes: bool,

    // Persistence
    pub state_file: PathBuf,
}

impl SwitcherConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Language - falls back to the page's authoring language
            default_language: match std::env::var("LANGSWITCH_DEFAULT_LANG") {
                Ok(code) => Language::from_code(&code)
                    .context("LANGSWITCH_DEFAULT_LANG is not a supported language code")?,
                Err(_) => Language::canonical(),
            },
            strict_codes: std::env::var("LANGSWITCH_STRICT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),

            // Persistence
            state_file: std::env::var("LANGSWITCH_STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("lang.json")),
        })
    }
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            default_language: Language::canonical(),
            strict_codes: false,
            state_file: PathBuf::from("lang.json"),
        }
    }
}
