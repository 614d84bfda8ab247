pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod eval;
pub mod config;
pub mod error;
pub mod pipeline;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::{logistic, relu, ActivationFunction};
pub use layers::dense::Layer;
pub use network::network::{ForwardCache, Gradients, Network};
pub use loss::mse::SquaredError;
pub use optim::sgd::Sgd;
pub use data::dataset::{Sample, Split};
pub use data::preprocess::Standardizer;
pub use train::{train_loop, EpochStats, TrainConfig};
pub use eval::confusion::{evaluate, predictions, ConfusionMatrix, LabelEncoding, RoundingRule};
pub use config::RunConfig;
pub use error::{Error, Result};
pub use pipeline::{run, run_on_samples, RunReport};
