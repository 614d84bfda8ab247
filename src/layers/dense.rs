use rand::Rng;

use crate::{activation::activation::ActivationFunction, math::matrix::Matrix};

/// A fully connected layer `a = f(W·x + b)`.
///
/// `weights` has shape `(size, input_size)` and `biases` has shape
/// `(size, 1)`. Neither ever changes shape after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub size: usize,
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction,
}

impl Layer {
    /// Draws the weights (row-major) and then the biases from `rng`.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        let weights = Matrix::uniform(size, input_size, rng);
        let biases = Matrix::uniform(size, 1, rng);

        Layer {
            size,
            weights,
            biases,
            activator: activation,
        }
    }

    /// Returns `(z, a)`: the pre-activation and the activation.
    pub fn feed_from(&self, input: &Matrix) -> (Matrix, Matrix) {
        let z = self.weights.dot(input) + self.biases.clone();
        let a = z.map(|x| self.activator.function(x));
        (z, a)
    }

    /// Turns `∂L/∂a` into `(∂L/∂W, ∂L/∂b)` for this layer.
    ///
    /// `z` is the pre-activation from the matching `feed_from` call and
    /// `inputs` the column that was fed in. `∂L/∂b` equals `∂L/∂z`, which
    /// `propagate` consumes to reach the previous layer.
    pub fn compute_gradients(&self, delta_a: &Matrix, z: &Matrix, inputs: &Matrix) -> (Matrix, Matrix) {
        let act_derivative = z.map(|x| self.activator.derivative(x));
        let delta_z = delta_a.hadamard(&act_derivative);

        let weights_grad = delta_z.dot(&inputs.transpose());
        (weights_grad, delta_z)
    }

    /// `Wᵗ · ∂L/∂z`, the error in the previous layer's activation space.
    pub fn propagate(&self, delta_z: &Matrix) -> Matrix {
        self.weights.transpose().dot(delta_z)
    }

    /// Applies pre-computed gradients scaled by lr.
    pub fn apply_gradients(&mut self, weights_grad: &Matrix, biases_grad: &Matrix, lr: f64) {
        self.weights.sub_scaled(weights_grad, lr);
        self.biases.sub_scaled(biases_grad, lr);
    }
}
