use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::eval::confusion::{LabelEncoding, RoundingRule};
use crate::train::train_config::TrainConfig;

/// Everything a run needs. Missing JSON fields fall back to the defaults,
/// which reproduce the reference run: seed 1234, 100 epochs, η = 0.01 and a
/// 2/3 train split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub data_path: PathBuf,
    pub delimiter: char,
    pub seed: u64,
    pub epochs: usize,
    pub learning_rate: f64,
    pub train_fraction: f64,
    /// Re-shuffle the training order every epoch (seeded from `seed`).
    pub shuffle_each_epoch: bool,
    pub rounding: RoundingRule,
    pub label_encoding: LabelEncoding,
    /// Epochs between progress lines at `info` level; 0 silences them.
    pub log_every: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            data_path: PathBuf::from("data_banknote_authentication.txt"),
            delimiter: ',',
            seed: 1234,
            epochs: 100,
            learning_rate: 0.01,
            train_fraction: 2.0 / 3.0,
            shuffle_each_epoch: false,
            rounding: RoundingRule::default(),
            label_encoding: LabelEncoding::default(),
            log_every: 10,
        }
    }
}

impl RunConfig {
    /// Deserializes a `RunConfig` from a JSON file.
    pub fn load_json(path: &Path) -> Result<RunConfig> {
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(Error::Config("epochs must be at least 1".into()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::Config(format!(
                "learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(Error::Config(format!(
                "train_fraction must lie strictly between 0 and 1, got {}",
                self.train_fraction
            )));
        }
        Ok(())
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig {
            epochs: self.epochs,
            learning_rate: self.learning_rate,
            shuffle_each_epoch: self.shuffle_each_epoch.then_some(self.seed),
            log_every: self.log_every,
        }
    }
}
