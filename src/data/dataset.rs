use crate::network::network::INPUT_SIZE;

/// One banknote: four image-derived features and a 0/1 label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub features: [f64; INPUT_SIZE],
    pub label: f64,
}

impl Sample {
    pub fn new(features: [f64; INPUT_SIZE], label: f64) -> Sample {
        Sample { features, label }
    }

    /// The label as a class index.
    pub fn class(&self) -> u8 {
        if self.label >= 0.5 {
            1
        } else {
            0
        }
    }
}

/// Train/test partitions produced by `preprocess::split`.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub train: Vec<Sample>,
    pub test: Vec<Sample>,
}
