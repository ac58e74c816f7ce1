//! quizscore configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::scorer::{DuplicatePolicy, QuizScorer};

/// Top-level quizscore configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizscoreConfig {
    /// How duplicate answers for one question are handled.
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// Output directory for saved score reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Directory listed by `quizscore list` when none is given.
    #[serde(default = "default_quiz_dir")]
    pub quiz_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./quizscore-results")
}
fn default_quiz_dir() -> PathBuf {
    PathBuf::from("./quizzes")
}

impl Default for QuizscoreConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            output_dir: default_output_dir(),
            quiz_dir: default_quiz_dir(),
        }
    }
}

impl QuizscoreConfig {
    /// A scorer configured with this config's duplicate policy.
    pub fn scorer(&self) -> QuizScorer {
        QuizScorer::new(self.duplicate_policy)
    }
}

/// Load config from an explicit path, or search the well-known locations.
///
/// Search order when no path is given:
/// 1. `quizscore.toml` in the current directory
/// 2. `~/.config/quizscore/config.toml`
///
/// Environment variable override: `QUIZSCORE_DUPLICATE_POLICY`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizscoreConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizscore.toml");
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
            parse_config_str(
                &std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config: {}", path.display()))?,
            )
            .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizscoreConfig::default(),
    };

    if let Ok(policy) = std::env::var("QUIZSCORE_DUPLICATE_POLICY") {
        apply_policy_override(&mut config, &policy)?;
    }

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config_str(content: &str) -> Result<QuizscoreConfig> {
    Ok(toml::from_str(content)?)
}

fn apply_policy_override(config: &mut QuizscoreConfig, value: &str) -> Result<()> {
    config.duplicate_policy = value
        .parse()
        .map_err(|e: String| anyhow::anyhow!("QUIZSCORE_DUPLICATE_POLICY: {e}"))?;
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizscore"))
}
