//! Optional text-classification capability.
//!
//! Strict boundary: `classify(text)` returns a label and a confidence.
//! The rule-based scorer never depends on this module succeeding — the
//! default loader falls back to the keyword classifier whenever the
//! external model is unavailable.

pub mod keyword;
#[cfg(feature = "onnx-classifier")]
pub mod onnx;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use keyword::KeywordClassifier;
#[cfg(feature = "onnx-classifier")]
pub use onnx::OnnxClassifier;

/// A category verdict for a piece of symptom text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    /// In [0, 1].
    pub confidence: f32,
}

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Model file not found: {0}")]
    ModelNotFound(PathBuf),

    #[error("Model initialization failed: {0}")]
    ModelInit(String),

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Label file invalid: {0}")]
    InvalidLabels(String),
}

/// Classify free symptom text into a disease-category label.
pub trait TextClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError>;
}

/// Load the best available classifier.
///
/// Tries the ONNX model under `model_dir` when the `onnx-classifier`
/// feature is enabled; any failure falls back to the keyword classifier
/// with a warning, so callers always get a working classifier.
pub fn load_default(model_dir: &Path) -> Box<dyn TextClassifier> {
    #[cfg(feature = "onnx-classifier")]
    match onnx::OnnxClassifier::load(model_dir) {
        Ok(classifier) => return Box::new(classifier),
        Err(e) => {
            tracing::warn!("ONNX classifier unavailable ({e}), using keyword fallback");
        }
    }

    #[cfg(not(feature = "onnx-classifier"))]
    let _ = model_dir;

    Box::new(KeywordClassifier)
}
