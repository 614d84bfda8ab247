/// The two activations the network uses: ReLU on the hidden layers and the
/// logistic sigmoid on the output unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationFunction {
    Sigmoid,
    ReLU,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => logistic(x),
            ActivationFunction::ReLU => relu(x),
        }
    }

    /// Derivative evaluated at the pre-activation `x`.
    ///
    /// ReLU uses the strict-positivity indicator, so the derivative at
    /// exactly zero is zero.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = logistic(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::ReLU => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

pub fn relu(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}

/// `1 / (1 + e^-x)`, branching on the sign so `exp` only ever sees a
/// non-positive argument.
pub fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
