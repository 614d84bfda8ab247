use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use banknote_nn::{run, EpochStats, LabelEncoding, RoundingRule, RunConfig};

/// Train the 4-16-16-1 banknote classifier and report its test-set confusion matrix.
#[derive(Parser, Debug)]
#[command(name = "banknote-nn", version, about)]
struct Cli {
    /// JSON file with a `RunConfig`; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delimited data file: four feature columns and a 0/1 label
    #[arg(long)]
    data: Option<PathBuf>,

    /// Column delimiter of the data file
    #[arg(long)]
    delimiter: Option<char>,

    /// Seed for the shuffle and the weight initialization
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    epochs: Option<usize>,

    #[arg(long)]
    learning_rate: Option<f64>,

    /// Share of the shuffled rows used for training
    #[arg(long)]
    train_fraction: Option<f64>,

    /// Re-shuffle the training order at every epoch
    #[arg(long)]
    shuffle_each_epoch: bool,

    /// Round a prediction of exactly 0.5 down to 0 instead of up to 1
    #[arg(long)]
    round_half_down: bool,

    /// Treat label 0 as genuine when naming classes in the report
    #[arg(long)]
    zero_is_genuine: bool,

    /// Write the per-epoch training history to this JSON file
    #[arg(long)]
    history_out: Option<PathBuf>,

    /// Log per-epoch detail
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<(RunConfig, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load_json(path)?,
            None => RunConfig::default(),
        };

        if let Some(data) = self.data {
            config.data_path = data;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(epochs) = self.epochs {
            config.epochs = epochs;
        }
        if let Some(lr) = self.learning_rate {
            config.learning_rate = lr;
        }
        if let Some(fraction) = self.train_fraction {
            config.train_fraction = fraction;
        }
        if self.shuffle_each_epoch {
            config.shuffle_each_epoch = true;
        }
        if self.round_half_down {
            config.rounding = RoundingRule::HalfDown;
        }
        if self.zero_is_genuine {
            config.label_encoding = LabelEncoding::ZeroIsGenuine;
        }

        Ok((config, self.history_out))
    }
}

/// Writes the per-epoch history as a pretty-printed JSON array.
fn write_history(path: &Path, history: &[EpochStats]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), history)
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "banknote_nn=debug" } else { "banknote_nn=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let (config, history_out) = cli.into_config()?;
    tracing::debug!(?config, "resolved configuration");

    let report = run(&config)
        .with_context(|| format!("training on {} failed", config.data_path.display()))?;

    if let Some(path) = history_out {
        write_history(&path, &report.history)?;
        tracing::info!("training history written to {}", path.display());
    }

    println!(
        "Trained on {} samples, tested on {} samples.\n",
        report.train_size, report.test_size
    );
    println!("{}", report.confusion.display(config.label_encoding));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        file
    }

    #[test]
    fn no_flags_gives_defaults() {
        let cli = Cli::try_parse_from(["banknote-nn"]).unwrap();
        let (config, history_out) = cli.into_config().unwrap();
        assert_eq!(config, RunConfig::default());
        assert!(history_out.is_none());
    }

    #[test]
    fn file_values_survive_without_flags() {
        let file = config_file(
            r#"{ "seed": 7, "epochs": 12, "delimiter": ";", "learning_rate": 0.5,
                 "train_fraction": 0.5, "data_path": "notes.csv", "shuffle_each_epoch": true,
                 "rounding": "half_down", "label_encoding": "zero_is_genuine" }"#,
        );
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["banknote-nn", "--config", path]).unwrap();
        let (config, _) = cli.into_config().unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.epochs, 12);
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.train_fraction, 0.5);
        assert_eq!(config.data_path, PathBuf::from("notes.csv"));
        assert!(config.shuffle_each_epoch);
        assert_eq!(config.rounding, RoundingRule::HalfDown);
        assert_eq!(config.label_encoding, LabelEncoding::ZeroIsGenuine);
    }

    #[test]
    fn flags_override_file_values() {
        let file = config_file(r#"{ "seed": 7, "epochs": 12, "learning_rate": 0.5 }"#);
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "banknote-nn",
            "--config", path,
            "--data", "other.txt",
            "--delimiter", "\t",
            "--seed", "99",
            "--epochs", "3",
            "--learning-rate", "0.02",
            "--train-fraction", "0.75",
            "--history-out", "history.json",
        ])
        .unwrap();
        let (config, history_out) = cli.into_config().unwrap();

        assert_eq!(config.data_path, PathBuf::from("other.txt"));
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.seed, 99);
        assert_eq!(config.epochs, 3);
        assert_eq!(config.learning_rate, 0.02);
        assert_eq!(config.train_fraction, 0.75);
        assert_eq!(history_out, Some(PathBuf::from("history.json")));
    }

    #[test]
    fn switches_map_to_config_enums() {
        let cli = Cli::try_parse_from([
            "banknote-nn",
            "--round-half-down",
            "--zero-is-genuine",
            "--shuffle-each-epoch",
        ])
        .unwrap();
        let (config, _) = cli.into_config().unwrap();

        assert_eq!(config.rounding, RoundingRule::HalfDown);
        assert_eq!(config.label_encoding, LabelEncoding::ZeroIsGenuine);
        assert!(config.shuffle_each_epoch);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::try_parse_from(["banknote-nn", "--config", "/no/such/config.json"]).unwrap();
        assert!(cli.into_config().is_err());
    }

    #[test]
    fn history_is_written_as_json_array() {
        let history: Vec<EpochStats> = (1..=4)
            .map(|epoch| EpochStats {
                epoch,
                total_epochs: 4,
                train_loss: 1.0 / epoch as f64,
                elapsed_ms: 0,
            })
            .collect();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        write_history(&path, &history).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let entries = written.as_array().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[3]["epoch"], 4);
        assert_eq!(entries[1]["train_loss"], 0.5);
    }
}
