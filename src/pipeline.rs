use rand::{rngs::StdRng, SeedableRng};

use crate::config::RunConfig;
use crate::data::csv::load_samples;
use crate::data::dataset::Sample;
use crate::data::preprocess::{self, Standardizer};
use crate::error::{Error, Result};
use crate::eval::confusion::{evaluate, ConfusionMatrix};
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::loop_fn::train_loop;

/// Outcome of one end-to-end run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub train_size: usize,
    pub test_size: usize,
    pub standardizer: Standardizer,
    pub history: Vec<EpochStats>,
    pub confusion: ConfusionMatrix,
    /// Final parameters. Kept in memory only.
    pub network: Network,
}

/// Loads `config.data_path` and runs `run_on_samples`.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    config.validate()?;
    let samples = load_samples(&config.data_path, config.delimiter)?;
    run_on_samples(samples, config)
}

/// Shuffle → standardize → split → initialize → train → evaluate.
///
/// A single generator seeded with `config.seed` drives the shuffle first and
/// the parameter initialization second, so the whole run is a function of
/// the data and the config.
pub fn run_on_samples(mut samples: Vec<Sample>, config: &RunConfig) -> Result<RunReport> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    preprocess::shuffle(&mut samples, &mut rng);
    let standardizer = Standardizer::fit(&samples)?;
    standardizer.transform_all(&mut samples);

    let split = preprocess::split(samples, config.train_fraction);
    if split.train.is_empty() {
        return Err(Error::EmptyDataset("training partition".into()));
    }
    if split.test.is_empty() {
        return Err(Error::EmptyDataset("test partition".into()));
    }

    let mut network = Network::with_rng(&mut rng);
    let history = train_loop(&mut network, &split.train, &config.train_config());

    let confusion = evaluate(&network, &split.test, config.rounding);
    tracing::info!(
        "test accuracy {:.2}% ({} of {} misclassified)",
        confusion.accuracy() * 100.0,
        confusion.misclassified(),
        confusion.total()
    );

    Ok(RunReport {
        train_size: split.train.len(),
        test_size: split.test.len(),
        standardizer,
        history,
        confusion,
        network,
    })
}
