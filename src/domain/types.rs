use serde::{Deserialize, Serialize};

use crate::classifier::model::SPAM;

/// Form body accepted by `POST /predict`.
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PredictionLabel {
    Spam,
    #[serde(rename = "Not Spam")]
    NotSpam,
}

impl PredictionLabel {
    /// Maps a raw classifier output to a label. Anything other than 1 reads as
    /// not-spam; the classifier contract only ever emits 0 or 1.
    pub fn from_raw(raw: u8) -> Self {
        if raw == SPAM {
            Self::Spam
        } else {
            Self::NotSpam
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction: PredictionLabel,
}
