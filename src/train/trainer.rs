use crate::{
    data::dataset::Sample,
    loss::mse::SquaredError,
    network::network::Network,
    optim::sgd::Sgd,
};

/// One online SGD step: forward, backward, update. Returns the sample's
/// loss under the parameters it was evaluated with.
pub fn train_sample(network: &mut Network, sample: &Sample, optimizer: &Sgd) -> f64 {
    let cache = network.forward(&sample.features);
    let loss = SquaredError::loss(cache.output(), sample.label);

    let grads = network.backward(&cache, &sample.features, sample.label);
    optimizer.step(network, &grads);

    loss
}

/// One pass over `samples` in the given order. Returns the mean loss.
pub fn train_epoch<'a, I>(network: &mut Network, samples: I, optimizer: &Sgd) -> f64
where
    I: IntoIterator<Item = &'a Sample>,
{
    let mut total_loss = 0.0;
    let mut n = 0usize;

    for sample in samples {
        total_loss += train_sample(network, sample, optimizer);
        n += 1;
    }

    if n == 0 {
        0.0
    } else {
        total_loss / n as f64
    }
}
