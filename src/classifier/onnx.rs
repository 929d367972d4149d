//! ONNX symptom classifier — behind the `onnx-classifier` feature.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;

use super::{Classification, ClassifierError, TextClassifier};

/// Classifier backed by an ONNX sequence-classification model.
///
/// Requires three files in the model directory:
/// - `model.onnx` — the model weights
/// - `tokenizer.json` — HuggingFace tokenizer definition
/// - `labels.json` — JSON array of labels, index-aligned with the logits
///
/// Uses interior mutability (Mutex) because ort::Session::run requires
/// `&mut self` but the TextClassifier trait exposes `&self`.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    tokenizer: tokenizers::Tokenizer,
    labels: Vec<String>,
}

impl OnnxClassifier {
    /// Load the ONNX classification model from a directory.
    pub fn load(model_dir: &Path) -> Result<Self, ClassifierError> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");
        let labels_path = model_dir.join("labels.json");

        for path in [&model_path, &tokenizer_path, &labels_path] {
            if !path.exists() {
                return Err(ClassifierError::ModelNotFound(path.clone()));
            }
        }

        let session = Session::builder()
            .map_err(|e: ort::Error| ClassifierError::ModelInit(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e: ort::Error| ClassifierError::ModelInit(e.to_string()))?
            .commit_from_file(&model_path)
            .map_err(|e: ort::Error| {
                ClassifierError::ModelInit(format!("ONNX load failed: {e}"))
            })?;

        let tokenizer = tokenizers::Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| ClassifierError::ModelInit(format!("Tokenizer load failed: {e}")))?;

        let labels_json = std::fs::read_to_string(&labels_path)
            .map_err(|e| ClassifierError::InvalidLabels(e.to_string()))?;
        let labels: Vec<String> = serde_json::from_str(&labels_json)
            .map_err(|e| ClassifierError::InvalidLabels(e.to_string()))?;
        if labels.is_empty() {
            return Err(ClassifierError::InvalidLabels("labels.json is empty".into()));
        }

        tracing::info!("ONNX classifier loaded from {}", model_dir.display());

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            labels,
        })
    }

    /// Tokenize text, run inference, and softmax the logits into a verdict.
    fn infer(&self, text: &str) -> Result<Classification, ClassifierError> {
        use ort::value::TensorRef;

        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| ClassifierError::Tokenization(e.to_string()))?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();

        let seq_len = input_ids.len();

        let ids_array = ndarray::Array2::from_shape_vec((1, seq_len), input_ids)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let mask_array = ndarray::Array2::from_shape_vec((1, seq_len), attention_mask)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let ids_tensor = TensorRef::from_array_view(&ids_array)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let mask_tensor = TensorRef::from_array_view(&mask_array)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| ClassifierError::Inference("Session lock poisoned".to_string()))?;

        let outputs = session
            .run(ort::inputs![ids_tensor, mask_tensor])
            .map_err(|e| ClassifierError::Inference(format!("ONNX inference failed: {e}")))?;

        let (shape, logits) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::Inference(format!("Output extraction: {e}")))?;

        // Validate shape: [1, num_labels]
        if shape.len() != 2 || shape[1] as usize != self.labels.len() {
            return Err(ClassifierError::Inference(format!(
                "Unexpected output shape: {shape:?}, expected [1, {}]",
                self.labels.len()
            )));
        }

        // Softmax, then argmax.
        let max_logit = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let exp: Vec<f32> = logits.iter().map(|l| (l - max_logit).exp()).collect();
        let sum: f32 = exp.iter().sum();

        let (best_index, best_exp) = exp
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .ok_or_else(|| ClassifierError::Inference("Empty logits".to_string()))?;

        Ok(Classification {
            label: self.labels[best_index].clone(),
            confidence: if sum > 0.0 { best_exp / sum } else { 0.0 },
        })
    }
}

impl TextClassifier for OnnxClassifier {
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        self.infer(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_fails_on_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = OnnxClassifier::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::ModelNotFound(_)));
    }

    #[test]
    fn load_reports_first_missing_file() {
        // Only the weights present: the tokenizer is the first missing file.
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("model.onnx"), b"not a real model").unwrap();
        let err = OnnxClassifier::load(dir.path()).unwrap_err();
        match err {
            ClassifierError::ModelNotFound(path) => {
                assert!(path.ends_with("tokenizer.json"));
            }
            other => panic!("expected ModelNotFound, got {other:?}"),
        }
    }
}
