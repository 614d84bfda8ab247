use std::time::Instant;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::data::dataset::Sample;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs of online SGD and returns one
/// `EpochStats` per epoch.
///
/// Samples are visited in the order given unless
/// `config.shuffle_each_epoch` is set. Training is strictly sequential:
/// every sample's update lands before the next sample's forward pass.
pub fn train_loop(network: &mut Network, train: &[Sample], config: &TrainConfig) -> Vec<EpochStats> {
    let optimizer = Sgd::new(config.learning_rate);
    let mut order: Vec<usize> = (0..train.len()).collect();
    let mut rng = config.shuffle_each_epoch.map(StdRng::seed_from_u64);
    let mut history = Vec::with_capacity(config.epochs);

    tracing::debug!(
        epochs = config.epochs,
        learning_rate = config.learning_rate,
        samples = train.len(),
        "starting training"
    );

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        if let Some(rng) = rng.as_mut() {
            order.shuffle(rng);
        }

        // ── One full pass over the training data ───────────────────────────
        let train_loss = train_epoch(network, order.iter().map(|&i| &train[i]), &optimizer);

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        tracing::debug!(epoch, train_loss, "epoch finished");
        if config.log_every > 0 && (epoch % config.log_every == 0 || epoch == config.epochs) {
            tracing::info!("epoch {}/{}: loss = {:.6}", epoch, config.epochs, train_loss);
        }

        history.push(stats);
    }

    history
}
