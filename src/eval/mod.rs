pub mod confusion;

pub use confusion::{evaluate, predictions, ConfusionMatrix, LabelEncoding, RoundingRule};
