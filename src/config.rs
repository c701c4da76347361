use crate::error::{PrompterError, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub language: String,
    pub chunk_count: usize,
    pub chunk_dir: String,
    pub merged_dir: String,
    pub delimiter: String,
    pub prompt: Option<String>,
    pub prompt_file: Option<String>, // Path to a text file holding the prompt
    pub clean_stale: bool,
}

impl Settings {
    /// Defaults, then the user config file, then `./prompter.*`, then `.env`
    /// and `PROMPTER_*` environment variables.
    pub fn new() -> std::result::Result<Self, ConfigError> {
        dotenv().ok();

        let mut builder = Self::defaults()?;
        if let Some(path) = Self::user_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        let config = builder
            .add_source(File::with_name("prompter").required(false))
            .add_source(Environment::with_prefix("PROMPTER").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    /// Defaults overlaid with a single config file; no environment lookup.
    pub fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("language", "en")?
            .set_default("chunk_count", 4)?
            .set_default("chunk_dir", "chunks")?
            .set_default("merged_dir", "merged")?
            .set_default("delimiter", ",")?
            .set_default("prompt", None::<String>)?
            .set_default("prompt_file", None::<String>)?
            .set_default("clean_stale", false)
    }

    /// `<config dir>/prompter_lex/config`, extension resolved by `config`.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("prompter_lex").join("config"))
    }

    /// Picks the merge prompt: explicit text, explicit file, configured text,
    /// configured file, otherwise empty.
    pub fn resolve_prompt(&self, text: Option<&str>, file: Option<&Path>) -> Result<String> {
        if let Some(text) = text {
            return Ok(text.to_string());
        }
        if let Some(file) = file {
            return read_prompt_file(file);
        }
        if let Some(text) = &self.prompt {
            return Ok(text.clone());
        }
        if let Some(file) = &self.prompt_file {
            return read_prompt_file(Path::new(file));
        }
        Ok(String::new())
    }
}

fn read_prompt_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| PrompterError::io(path, e))
}
