use crate::device_camera::interface::CapturedImage;
use crate::error::InferenceError;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Classifications ranked by descending confidence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassificationResult {
    classifications: Vec<Classification>,
}

impl ClassificationResult {
    pub fn new(mut classifications: Vec<Classification>) -> Self {
        classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        Self { classifications }
    }

    pub fn as_slice(&self) -> &[Classification] {
        &self.classifications
    }

    pub fn top(&self, count: usize) -> &[Classification] {
        &self.classifications[..count.min(self.classifications.len())]
    }

    pub fn first(&self) -> Option<&Classification> {
        self.classifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.classifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classifications.len()
    }
}

pub trait ImageClassifier {
    fn classify(&self, image: &CapturedImage) -> Result<ClassificationResult, InferenceError>;
}
