use crate::device_camera::interface::CapturedImage;
use crate::error::InferenceError;
use crate::image_classifier::decode::decode_captured_image;
use crate::image_classifier::interface::{Classification, ClassificationResult, ImageClassifier};
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

const OBJECTS: &[&str] = &[
    "pizza",
    "apple_pie",
    "hamburger",
    "sushi",
    "ramen",
    "french_fries",
    "ice_cream",
    "caesar_salad",
    "pancakes",
    "tacos",
];

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    response: Option<Result<ClassificationResult, InferenceError>>,
}

impl ImageClassifierFake {
    /// Answers every image with a couple of random labels.
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
            response: None,
        }
    }

    /// Answers every decodable image with `response`.
    #[cfg(test)]
    pub fn with_response(
        logger: Arc<dyn Logger + Send + Sync>,
        response: Result<ClassificationResult, InferenceError>,
    ) -> Self {
        Self {
            response: Some(response),
            ..Self::new(logger)
        }
    }

    fn random_result(&self) -> Result<ClassificationResult, InferenceError> {
        let mut rng = rand::rng();

        let index_dist = Uniform::new(0, OBJECTS.len())
            .map_err(|e| InferenceError::Execution(e.to_string()))?;
        let confidence_dist =
            Uniform::new(0.0f32, 1.0).map_err(|e| InferenceError::Execution(e.to_string()))?;

        let classifications = (0..2)
            .map(|_| Classification {
                label: OBJECTS[index_dist.sample(&mut rng)].to_string(),
                confidence: confidence_dist.sample(&mut rng),
            })
            .collect();

        Ok(ClassificationResult::new(classifications))
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &CapturedImage) -> Result<ClassificationResult, InferenceError> {
        let _ = self.logger.info(&format!("Classifying {}", image.source));

        decode_captured_image(image)?;

        match &self.response {
            Some(response) => response.clone(),
            None => self.random_result(),
        }
    }
}
