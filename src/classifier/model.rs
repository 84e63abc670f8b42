use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

pub const SPAM: u8 = 1;
pub const NOT_SPAM: u8 = 0;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier produced no output for input batch")]
    EmptyOutput,
    #[error("classifier invocation failed: {0}")]
    Invocation(String),
}

/// Opaque pre-trained classification capability. Takes a batch of normalized
/// texts and returns one binary label per input.
pub trait Classifier: Send + Sync {
    fn predict(&self, batch: &[String]) -> Result<Vec<u8>, ClassifierError>;
}

/// Pre-trained linear bag-of-words model loaded from a JSON artifact.
///
/// A message scores `bias + sum(weights[token])` over its whitespace tokens;
/// a positive score labels it spam. The artifact is treated as a black box
/// produced by an offline training run, never modified here.
#[derive(Debug, Deserialize)]
pub struct LinearModel {
    bias: f64,
    weights: HashMap<String, f64>,
}

impl LinearModel {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifact {}", path.display()))?;
        let model: LinearModel = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse model artifact {}", path.display()))?;
        tracing::info!(
            target: "model",
            path = %path.display(),
            vocabulary = model.weights.len(),
            "model loaded successfully"
        );
        Ok(model)
    }

    fn score(&self, text: &str) -> f64 {
        text.split_whitespace()
            .filter_map(|token| self.weights.get(token))
            .sum::<f64>()
            + self.bias
    }
}

impl Classifier for LinearModel {
    fn predict(&self, batch: &[String]) -> Result<Vec<u8>, ClassifierError> {
        Ok(batch
            .iter()
            .map(|text| if self.score(text) > 0.0 { SPAM } else { NOT_SPAM })
            .collect())
    }
}
