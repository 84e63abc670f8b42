pub mod model;

pub use model::{Classifier, ClassifierError, LinearModel};
