/// Per-sample squared error `(ŷ − y)²` for the single output unit.
pub struct SquaredError;

impl SquaredError {
    pub fn loss(predicted: f64, expected: f64) -> f64 {
        (predicted - expected).powi(2)
    }

    /// `∂L/∂ŷ = 2(ŷ − y)`
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        2.0 * (predicted - expected)
    }
}
