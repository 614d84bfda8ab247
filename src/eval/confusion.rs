use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::dataset::Sample;
use crate::network::network::Network;

/// How a prediction of exactly 0.5 is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingRule {
    /// `ŷ ≥ 0.5` → 1.
    #[default]
    HalfUp,
    /// `ŷ > 0.5` → 1.
    HalfDown,
}

impl RoundingRule {
    pub fn classify(&self, y_hat: f64) -> u8 {
        let positive = match self {
            RoundingRule::HalfUp => y_hat >= 0.5,
            RoundingRule::HalfDown => y_hat > 0.5,
        };
        u8::from(positive)
    }
}

/// Which label value stands for a genuine note. Only affects reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelEncoding {
    #[default]
    OneIsGenuine,
    ZeroIsGenuine,
}

impl LabelEncoding {
    pub fn class_name(&self, class: u8) -> &'static str {
        match (self, class) {
            (LabelEncoding::OneIsGenuine, 1) | (LabelEncoding::ZeroIsGenuine, 0) => "genuine",
            _ => "forged",
        }
    }
}

/// 2×2 tally of predictions against labels; class 1 is "positive".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    pub true_negative: usize,
    pub false_positive: usize,
    pub false_negative: usize,
    pub true_positive: usize,
}

impl ConfusionMatrix {
    pub fn record(&mut self, actual: u8, predicted: u8) {
        match (actual, predicted) {
            (0, 0) => self.true_negative += 1,
            (0, _) => self.false_positive += 1,
            (_, 0) => self.false_negative += 1,
            _ => self.true_positive += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.true_negative + self.false_positive + self.false_negative + self.true_positive
    }

    pub fn correct(&self) -> usize {
        self.true_negative + self.true_positive
    }

    pub fn misclassified(&self) -> usize {
        self.total() - self.correct()
    }

    /// Fraction in [0, 1]; 0 for an empty tally.
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct(), self.total())
    }

    pub fn precision(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    /// Renders the table with class names from `encoding`.
    pub fn display(&self, encoding: LabelEncoding) -> ConfusionDisplay<'_> {
        ConfusionDisplay { matrix: self, encoding }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

pub struct ConfusionDisplay<'a> {
    matrix: &'a ConfusionMatrix,
    encoding: LabelEncoding,
}

impl fmt::Display for ConfusionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.matrix;
        let neg = format!("0 ({})", self.encoding.class_name(0));
        let pos = format!("1 ({})", self.encoding.class_name(1));
        writeln!(f, "{:>14}  {:>14}  {:>14}", "actual \\ pred", neg, pos)?;
        writeln!(f, "{:>14}  {:>14}  {:>14}", neg, m.true_negative, m.false_positive)?;
        writeln!(f, "{:>14}  {:>14}  {:>14}", pos, m.false_negative, m.true_positive)?;
        write!(
            f,
            "accuracy: {:.2}% ({}/{})",
            m.accuracy() * 100.0,
            m.correct(),
            m.total()
        )
    }
}

/// Rounded predictions for every sample, in order.
pub fn predictions(network: &Network, samples: &[Sample], rule: RoundingRule) -> Vec<u8> {
    samples
        .iter()
        .map(|s| rule.classify(network.predict(&s.features)))
        .collect()
}

/// Runs the forward pass over `samples` and tallies the outcomes.
pub fn evaluate(network: &Network, samples: &[Sample], rule: RoundingRule) -> ConfusionMatrix {
    let mut matrix = ConfusionMatrix::default();
    for (sample, predicted) in samples.iter().zip(predictions(network, samples, rule)) {
        matrix.record(sample.class(), predicted);
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_rounding_is_configurable() {
        assert_eq!(RoundingRule::HalfUp.classify(0.5), 1);
        assert_eq!(RoundingRule::HalfDown.classify(0.5), 0);
        assert_eq!(RoundingRule::HalfDown.classify(0.5000001), 1);
        assert_eq!(RoundingRule::HalfUp.classify(0.4999999), 0);
    }

    #[test]
    fn label_encoding_names_classes() {
        assert_eq!(LabelEncoding::OneIsGenuine.class_name(1), "genuine");
        assert_eq!(LabelEncoding::OneIsGenuine.class_name(0), "forged");
        assert_eq!(LabelEncoding::ZeroIsGenuine.class_name(0), "genuine");
        assert_eq!(LabelEncoding::ZeroIsGenuine.class_name(1), "forged");
    }

    #[test]
    fn reference_tally_accuracy() {
        let m = ConfusionMatrix {
            true_negative: 266,
            false_positive: 0,
            false_negative: 1,
            true_positive: 190,
        };
        assert_eq!(m.total(), 457);
        assert_eq!(m.misclassified(), 1);
        assert!((m.accuracy() - 456.0 / 457.0).abs() < 1e-12);
        assert_eq!(m.precision(), 1.0);
        assert!(m.display(LabelEncoding::OneIsGenuine).to_string().contains("99.78%"));
    }

    #[test]
    fn empty_tally_has_zero_accuracy() {
        assert_eq!(ConfusionMatrix::default().accuracy(), 0.0);
    }

    #[test]
    fn record_routes_each_cell() {
        let mut m = ConfusionMatrix::default();
        m.record(0, 0);
        m.record(0, 1);
        m.record(1, 0);
        m.record(1, 1);
        m.record(1, 1);
        assert_eq!((m.true_negative, m.false_positive, m.false_negative, m.true_positive), (1, 1, 1, 2));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let network = Network::new(8);
        let samples: Vec<Sample> = (0..20)
            .map(|i| {
                let v = i as f64 / 10.0 - 1.0;
                Sample::new([v, -v, v * v, 0.3], (i % 2) as f64)
            })
            .collect();
        let first = predictions(&network, &samples, RoundingRule::HalfUp);
        let second = predictions(&network, &samples, RoundingRule::HalfUp);
        assert_eq!(first, second);
        assert_eq!(
            evaluate(&network, &samples, RoundingRule::HalfUp),
            evaluate(&network, &samples, RoundingRule::HalfUp)
        );
    }
}
