pub mod normalizer;
pub mod stopwords;

pub use normalizer::{normalize, ValidationError, MAX_MESSAGE_CHARS};
pub use stopwords::StopWords;
