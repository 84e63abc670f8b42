pub mod types;

pub use types::{PredictForm, PredictionLabel, PredictionResponse};
