/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`:             total number of full passes over the training data
/// - `learning_rate`:      fixed SGD step size η
/// - `shuffle_each_epoch`: when `Some(seed)`, the visiting order is
///                          re-shuffled at the start of every epoch with a
///                          generator seeded from `seed`; `None` keeps the
///                          order the samples were given in
/// - `log_every`:          epochs between `info` progress lines (0 disables)
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub shuffle_each_epoch: Option<u64>,
    pub log_every: usize,
}

impl TrainConfig {
    /// Fixed-order training with progress logged every 10 epochs.
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            shuffle_each_epoch: None,
            log_every: 10,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(100, 0.01)
    }
}
