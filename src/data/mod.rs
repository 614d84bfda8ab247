pub mod csv;
pub mod dataset;
pub mod preprocess;

pub use dataset::{Sample, Split};
pub use preprocess::Standardizer;
