use crate::image_classifier::models::model_config::ModelConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultMode {
    TopOne,
    TopTwo,
}

impl ResultMode {
    pub fn count(&self) -> usize {
        match self {
            ResultMode::TopOne => 1,
            ResultMode::TopTwo => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub host: String,
    pub query_prefix: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierBackend {
    TractOnnx(ModelConfig),
    /// Random labels, for trying the app without a model file.
    Fake,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub inner_size: [f32; 2],
}

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: chrono::FixedOffset,
    pub result_mode: ResultMode,
    pub result_separator: String,
    pub offer_web_search: bool,
    pub search: SearchConfig,
    pub classifier: ClassifierBackend,
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: local_offset(),
            result_mode: ResultMode::TopTwo,
            result_separator: " |".to_string(),
            offer_web_search: true,
            search: SearchConfig {
                host: "www.google.com".to_string(),
                query_prefix: "how to make".to_string(),
            },
            classifier: default_classifier(),
            window: WindowConfig {
                title: "Photo Identifier".to_string(),
                inner_size: [420.0, 220.0],
            },
        }
    }
}

fn default_classifier() -> ClassifierBackend {
    if cfg!(feature = "fake-classifier") {
        ClassifierBackend::Fake
    } else {
        ClassifierBackend::TractOnnx(ModelConfig::default())
    }
}

fn local_offset() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
