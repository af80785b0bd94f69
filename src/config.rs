use crate::content::{self, Identity, NavCommand};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("navigation table is empty")]
    EmptyNavigation,
    #[error("navigation entry {0} has a blank command")]
    BlankCommand(usize),
    #[error("duplicate navigation command: {0}")]
    DuplicateCommand(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub identity: Identity,
    prompt: Option<String>,
    pub navigation: Vec<NavCommand>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            identity: Identity::default(),
            prompt: None,
            navigation: content::navigation(),
        }
    }
}

impl TerminalConfig {
    pub fn from_json(json: &str) -> Result<TerminalConfig, ConfigError> {
        let mut cfg: TerminalConfig = serde_json::from_str(json)?;
        cfg.normalize()?;
        Ok(cfg)
    }

    /// Folds navigation commands to their matching form and rejects tables
    /// that could not be dispatched unambiguously.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        if self.navigation.is_empty() {
            return Err(ConfigError::EmptyNavigation);
        }
        let mut seen = HashSet::new();
        for (i, item) in self.navigation.iter_mut().enumerate() {
            item.command = item.command.trim().to_lowercase();
            if item.command.is_empty() {
                return Err(ConfigError::BlankCommand(i));
            }
            if !seen.insert(item.command.clone()) {
                return Err(ConfigError::DuplicateCommand(item.command.clone()));
            }
        }
        Ok(())
    }

    pub fn prompt(&self) -> String {
        match &self.prompt {
            Some(p) => p.clone(),
            None => content::prompt_for(&self.identity.name),
        }
    }

    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.prompt = Some(prompt.to_string());
        self
    }
}
