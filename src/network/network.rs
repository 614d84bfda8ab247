use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::activation::activation::ActivationFunction;
use crate::layers::dense::Layer;
use crate::loss::mse::SquaredError;
use crate::math::matrix::Matrix;

pub const INPUT_SIZE: usize = 4;
pub const HIDDEN_SIZE: usize = 16;
pub const OUTPUT_SIZE: usize = 1;

/// Intermediate values of one forward pass, kept for the matching backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardCache {
    pub z1: Matrix,
    pub a1: Matrix,
    pub z2: Matrix,
    pub a2: Matrix,
    pub z3: Matrix,
    pub y_hat: Matrix,
}

impl ForwardCache {
    /// The network output ŷ as a plain number.
    pub fn output(&self) -> f64 {
        self.y_hat.scalar()
    }
}

/// Loss gradients for every parameter tensor, shaped like the parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub w1: Matrix,
    pub b1: Matrix,
    pub w2: Matrix,
    pub b2: Matrix,
    pub w3: Matrix,
    pub b3: Matrix,
}

/// The fixed 4 → 16 → 16 → 1 classifier.
///
/// All six parameter tensors live here; callers hold the `Network` and pass
/// it explicitly to forward, backward and the optimizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub hidden1: Layer,
    pub hidden2: Layer,
    pub output: Layer,
}

impl Network {
    /// Seeds a fresh `StdRng` and initializes from it.
    pub fn new(seed: u64) -> Network {
        Network::with_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Fills W1, b1, W2, b2, W3, b3 in that order with U[0, 1) draws.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Network {
        let hidden1 = Layer::new(HIDDEN_SIZE, INPUT_SIZE, ActivationFunction::ReLU, rng);
        let hidden2 = Layer::new(HIDDEN_SIZE, HIDDEN_SIZE, ActivationFunction::ReLU, rng);
        let output = Layer::new(OUTPUT_SIZE, HIDDEN_SIZE, ActivationFunction::Sigmoid, rng);
        Network { hidden1, hidden2, output }
    }

    pub fn forward(&self, x: &[f64; INPUT_SIZE]) -> ForwardCache {
        let x = Matrix::column(x);
        let (z1, a1) = self.hidden1.feed_from(&x);
        let (z2, a2) = self.hidden2.feed_from(&a1);
        let (z3, y_hat) = self.output.feed_from(&a2);
        ForwardCache { z1, a1, z2, a2, z3, y_hat }
    }

    /// Output probability for a single input.
    pub fn predict(&self, x: &[f64; INPUT_SIZE]) -> f64 {
        self.forward(x).output()
    }

    /// Gradient of `(ŷ − y)²` with respect to every parameter.
    pub fn backward(&self, cache: &ForwardCache, x: &[f64; INPUT_SIZE], y: f64) -> Gradients {
        let x = Matrix::column(x);

        // Output layer: ∂L/∂ŷ through the logistic to ∂L/∂z3.
        let d_y_hat = Matrix::column(&[SquaredError::derivative(cache.output(), y)]);
        let (w3, b3) = self.output.compute_gradients(&d_y_hat, &cache.z3, &cache.a2);

        let d_a2 = self.output.propagate(&b3);
        let (w2, b2) = self.hidden2.compute_gradients(&d_a2, &cache.z2, &cache.a1);

        let d_a1 = self.hidden2.propagate(&b2);
        let (w1, b1) = self.hidden1.compute_gradients(&d_a1, &cache.z1, &x);

        Gradients { w1, b1, w2, b2, w3, b3 }
    }

    /// Squared error of the current parameters on one sample.
    pub fn loss(&self, x: &[f64; INPUT_SIZE], y: f64) -> f64 {
        SquaredError::loss(self.predict(x), y)
    }
}
