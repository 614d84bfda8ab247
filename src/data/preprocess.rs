use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::dataset::{Sample, Split};
use crate::error::{Error, Result};
use crate::network::network::INPUT_SIZE;

/// Fisher-Yates shuffle driven by the caller's generator, so a seeded
/// generator always yields the same order.
pub fn shuffle<R: Rng + ?Sized>(samples: &mut [Sample], rng: &mut R) {
    samples.shuffle(rng);
}

/// Per-column z-score statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardizer {
    pub means: [f64; INPUT_SIZE],
    pub std_devs: [f64; INPUT_SIZE],
}

impl Standardizer {
    /// Population mean and standard deviation of each feature column.
    ///
    /// A column with zero spread gets a divisor of 1 so it is only centred.
    pub fn fit(samples: &[Sample]) -> Result<Standardizer> {
        if samples.is_empty() {
            return Err(Error::EmptyDataset("standardization input".into()));
        }
        let n = samples.len() as f64;

        let mut means = [0.0; INPUT_SIZE];
        for s in samples {
            for (m, v) in means.iter_mut().zip(s.features.iter()) {
                *m += v;
            }
        }
        means.iter_mut().for_each(|m| *m /= n);

        let mut std_devs = [0.0; INPUT_SIZE];
        for s in samples {
            for ((sd, v), m) in std_devs.iter_mut().zip(s.features.iter()).zip(means.iter()) {
                *sd += (v - m).powi(2);
            }
        }
        for sd in std_devs.iter_mut() {
            *sd = (*sd / n).sqrt();
            if *sd == 0.0 {
                *sd = 1.0;
            }
        }

        tracing::debug!(?means, ?std_devs, "fitted feature standardization");
        Ok(Standardizer { means, std_devs })
    }

    pub fn transform(&self, sample: &Sample) -> Sample {
        let mut features = sample.features;
        for (i, f) in features.iter_mut().enumerate() {
            *f = (*f - self.means[i]) / self.std_devs[i];
        }
        Sample::new(features, sample.label)
    }

    pub fn transform_all(&self, samples: &mut [Sample]) {
        for s in samples.iter_mut() {
            *s = self.transform(s);
        }
    }
}

/// Keeps the first `round(len · train_fraction)` samples for training and
/// the rest for testing, preserving order.
pub fn split(mut samples: Vec<Sample>, train_fraction: f64) -> Split {
    let total = samples.len();
    let split_at = ((total as f64) * train_fraction).round() as usize;
    let test = samples.split_off(split_at.min(total));

    tracing::debug!("dataset split: {} train, {} test", samples.len(), test.len());

    Split { train: samples, test }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn ramp(n: usize) -> Vec<Sample> {
        (0..n)
            .map(|i| {
                let v = i as f64;
                Sample::new([v, 2.0 * v, -v, 5.0], (i % 2) as f64)
            })
            .collect()
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut a = ramp(50);
        let mut b = ramp(50);
        shuffle(&mut a, &mut StdRng::seed_from_u64(1234));
        shuffle(&mut b, &mut StdRng::seed_from_u64(1234));
        assert_eq!(a, b);
        assert_ne!(a, ramp(50));
    }

    #[test]
    fn standardized_columns_have_zero_mean_unit_variance() {
        let mut samples = ramp(20);
        let scaler = Standardizer::fit(&samples).unwrap();
        scaler.transform_all(&mut samples);

        for col in 0..3 {
            let n = samples.len() as f64;
            let mean = samples.iter().map(|s| s.features[col]).sum::<f64>() / n;
            let var = samples.iter().map(|s| (s.features[col] - mean).powi(2)).sum::<f64>() / n;
            assert_relative_eq!(mean, 0.0, epsilon = 1e-12);
            assert_relative_eq!(var, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn constant_column_is_centred_only() {
        let mut samples = ramp(4);
        let scaler = Standardizer::fit(&samples).unwrap();
        assert_eq!(scaler.std_devs[3], 1.0);
        scaler.transform_all(&mut samples);
        assert!(samples.iter().all(|s| s.features[3] == 0.0));
    }

    #[test]
    fn labels_survive_standardization() {
        let samples = ramp(6);
        let scaler = Standardizer::fit(&samples).unwrap();
        let labels: Vec<f64> = samples.iter().map(|s| scaler.transform(s).label).collect();
        assert_eq!(labels, vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn fit_rejects_empty_input() {
        assert!(Standardizer::fit(&[]).is_err());
    }

    #[test]
    fn two_thirds_split_of_banknote_sized_set() {
        let parts = split(ramp(1372), 2.0 / 3.0);
        assert_eq!(parts.train.len(), 915);
        assert_eq!(parts.test.len(), 457);
        assert_eq!(parts.train[0].features[0], 0.0);
        assert_eq!(parts.test[0].features[0], 915.0);
    }

    #[test]
    fn split_keeps_every_sample() {
        let parts = split(ramp(10), 1.0);
        assert_eq!(parts.train.len(), 10);
        assert!(parts.test.is_empty());
    }
}
