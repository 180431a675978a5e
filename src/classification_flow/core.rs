use crate::classification_flow::format::format_classifications;
use crate::classification_flow::search::search_url;
use crate::config::Config;
use crate::device_camera::interface::CapturedImage;
use crate::error::InferenceError;
use crate::image_classifier::interface::ClassificationResult;

pub const PROMPT_TEXT: &str = "Take a photo to identify it.";
pub const CLASSIFYING_TEXT: &str = "Classifying...";
pub const NOTHING_RECOGNIZED_TEXT: &str = "Nothing recognized.";

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Prompt,
    Classifying,
    Results(String),
    NothingRecognized,
    Error(String),
}

impl DisplayState {
    pub fn text(&self) -> &str {
        match self {
            DisplayState::Prompt => PROMPT_TEXT,
            DisplayState::Classifying => CLASSIFYING_TEXT,
            DisplayState::Results(text) => text,
            DisplayState::NothingRecognized => NOTHING_RECOGNIZED_TEXT,
            DisplayState::Error(message) => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Idle,
    Capturing {
        previous: Box<State>,
    },
    Classifying {
        source: String,
    },
    Displaying {
        display: DisplayState,
        top_label: Option<String>,
    },
    Failed {
        message: String,
    },
}

impl State {
    pub fn display_state(&self) -> DisplayState {
        match self {
            State::Idle => DisplayState::Prompt,
            State::Capturing { previous } => previous.display_state(),
            State::Classifying { .. } => DisplayState::Classifying,
            State::Displaying { display, .. } => display.clone(),
            State::Failed { message } => DisplayState::Error(message.clone()),
        }
    }

    /// A photo is being taken or classified.
    pub fn is_busy(&self) -> bool {
        matches!(self, State::Capturing { .. } | State::Classifying { .. })
    }
}

#[derive(Debug)]
pub enum Msg {
    TakePhotoPressed,
    PhotoCaptureDone(Result<Option<CapturedImage>, Box<dyn std::error::Error + Send + Sync>>),
    ClassifyDone(Result<ClassificationResult, InferenceError>),
    SearchConfirmDone {
        label: String,
        result: Result<bool, Box<dyn std::error::Error + Send + Sync>>,
    },
    OpenUrlDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CapturePhoto,
    Classify { image: CapturedImage },
    ConfirmSearch { label: String },
    OpenUrl { url: String },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::Idle, vec![])
}

pub fn capture_failed_message(error: &str) -> String {
    format!("Unable to take photo.\n{}", error)
}

pub fn classify_failed_message(error: &InferenceError) -> String {
    format!("Unable to classify image.\n{}", error)
}

pub fn transition(config: &Config, state: State, msg: Msg) -> (State, Vec<Effect>) {
    match (state, msg) {
        // Capture
        (state, Msg::TakePhotoPressed) if state.is_busy() => (state, vec![]),
        (state, Msg::TakePhotoPressed) => (
            State::Capturing {
                previous: Box::new(state),
            },
            vec![Effect::CapturePhoto],
        ),
        (State::Capturing { previous }, Msg::PhotoCaptureDone(Ok(None))) => (*previous, vec![]),
        (State::Capturing { .. }, Msg::PhotoCaptureDone(Ok(Some(image)))) => {
            if image.is_empty() {
                (
                    State::Failed {
                        message: classify_failed_message(&InferenceError::EmptyImage),
                    },
                    vec![],
                )
            } else {
                (
                    State::Classifying {
                        source: image.source.clone(),
                    },
                    vec![Effect::Classify { image }],
                )
            }
        }
        (State::Capturing { .. }, Msg::PhotoCaptureDone(Err(e))) => (
            State::Failed {
                message: capture_failed_message(&e.to_string()),
            },
            vec![],
        ),

        // Classification
        (State::Classifying { .. }, Msg::ClassifyDone(Err(e))) => (
            State::Failed {
                message: classify_failed_message(&e),
            },
            vec![],
        ),
        (State::Classifying { .. }, Msg::ClassifyDone(Ok(result))) => {
            let Some(top) = result.first() else {
                return (
                    State::Displaying {
                        display: DisplayState::NothingRecognized,
                        top_label: None,
                    },
                    vec![],
                );
            };

            let top_label = top.label.clone();
            let text = format_classifications(
                &result,
                config.result_mode.count(),
                &config.result_separator,
            );

            let effects = if config.offer_web_search {
                vec![Effect::ConfirmSearch {
                    label: top_label.clone(),
                }]
            } else {
                vec![]
            };

            (
                State::Displaying {
                    display: DisplayState::Results(text),
                    top_label: Some(top_label),
                },
                effects,
            )
        }

        // Follow-up search
        (
            state,
            Msg::SearchConfirmDone {
                label,
                result: Ok(true),
            },
        ) => {
            let url = search_url(&config.search, &label);
            (state, vec![Effect::OpenUrl { url }])
        }

        // Default case
        (state, _) => (state, vec![]),
    }
}
