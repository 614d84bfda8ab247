use crate::network::network::{Gradients, Network};

/// Plain gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// `P ← P − η·G` for all six parameter tensors.
    pub fn step(&self, network: &mut Network, grads: &Gradients) {
        let lr = self.learning_rate;
        network.output.apply_gradients(&grads.w3, &grads.b3, lr);
        network.hidden2.apply_gradients(&grads.w2, &grads.b2, lr);
        network.hidden1.apply_gradients(&grads.w1, &grads.b1, lr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_against_gradient() {
        let mut network = Network::new(9);
        let before = network.clone();
        let x = [0.5, -0.5, 1.0, 0.0];
        let grads = network.backward(&network.forward(&x), &x, 0.0);

        Sgd::new(0.1).step(&mut network, &grads);

        let expected = before.output.biases.data[0][0] - 0.1 * grads.b3.data[0][0];
        assert_eq!(network.output.biases.data[0][0], expected);
        assert_eq!(network.hidden1.weights.shape(), (16, 4));
    }

    #[test]
    fn zero_learning_rate_is_a_no_op() {
        let mut network = Network::new(9);
        let before = network.clone();
        let x = [1.0, 2.0, 3.0, 4.0];
        let grads = network.backward(&network.forward(&x), &x, 1.0);
        Sgd::new(0.0).step(&mut network, &grads);
        assert_eq!(network, before);
    }
}
