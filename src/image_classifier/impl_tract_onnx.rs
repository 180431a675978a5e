use crate::device_camera::interface::CapturedImage;
use crate::error::{InferenceError, ModelLoadError};
use crate::image_classifier::decode::decode_captured_image;
use crate::image_classifier::interface::{Classification, ClassificationResult, ImageClassifier};
use crate::image_classifier::models::labels::load_labels;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::center_crop_to_tensor;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ModelLoadError> {
        let logger = logger.with_namespace("classifier").with_namespace("tract_onnx");
        let _ = logger.info(&format!("Loading model {}", config.onnx_model_path));

        let labels = load_labels(&config.labels_path)?;

        let (height, width) = config.input_shape;
        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    f32::fact([1, 3, height as usize, width as usize]).into(),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ModelLoadError::Model {
                path: config.onnx_model_path.clone(),
                message: e.to_string(),
            })?;

        let _ = logger.info(&format!("Model loaded with {} labels", labels.len()));

        Ok(Self {
            model,
            labels,
            config,
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(&self, image: &CapturedImage) -> Result<ClassificationResult, InferenceError> {
        let _ = self.logger.info(&format!("Classifying {}", image.source));

        let decoded = decode_captured_image(image)?;

        let (height, width) = self.config.input_shape;
        let input = center_crop_to_tensor(&decoded, width, height, self.config.mean, self.config.std)
            .map_err(|e| InferenceError::Execution(e.to_string()))?;

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| InferenceError::Execution(e.to_string()))?;

        let output = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| InferenceError::Execution(e.to_string()))?;
        let scores: Vec<f32> = output.iter().copied().collect();

        if scores.len() != self.labels.len() {
            return Err(InferenceError::Execution(format!(
                "model produced {} scores for {} labels",
                scores.len(),
                self.labels.len()
            )));
        }

        let scores = if self.config.apply_softmax {
            softmax(&scores)
        } else {
            scores
        };

        let result = rank(
            &self.labels,
            &scores,
            self.config.min_confidence,
            self.config.max_classifications,
        );
        let _ = self.logger.info(&format!(
            "{} classifications: {:?}",
            result.len(),
            result.as_slice()
        ));

        Ok(result)
    }
}

pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Pairs scores with labels, drops weak predictions and keeps the strongest few.
pub fn rank(
    labels: &[String],
    scores: &[f32],
    min_confidence: f32,
    max_classifications: usize,
) -> ClassificationResult {
    let classifications = labels
        .iter()
        .zip(scores)
        .filter(|(_, score)| **score >= min_confidence)
        .map(|(label, &score)| Classification::new(label.clone(), score))
        .collect();

    let ranked = ClassificationResult::new(classifications);

    ClassificationResult::new(ranked.top(max_classifications).to_vec())
}
