//! rec - train a fully connected digit classifier on MNIST.
//!
//! Usage:
//!   rec --data-dir ./mnist                          # defaults
//!   rec --data-dir ./mnist --architecture 784-64-10 # custom network
//!   rec --data-dir ./mnist --epochs 5 --seed 42     # reproducible run

use clap::Parser;
use reconocer::dataset::Mnist;
use reconocer::nn::{Architecture, Mlp};
use std::path::PathBuf;
use std::process::ExitCode;

/// rec - MNIST digit classifier trainer
///
/// Trains a feed-forward network with hand-derived backpropagation and
/// reports test-set accuracy after every epoch.
#[derive(Parser)]
#[command(name = "rec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the four MNIST IDX files
    #[arg(long, value_name = "DIR")]
    data_dir: PathBuf,

    /// Dash-separated layer widths, e.g. 784-128-10
    #[arg(long, default_value = "784-128-10")]
    architecture: String,

    /// Gradient step size
    #[arg(long, default_value_t = 0.1, value_parser = positive_f32)]
    learning_rate: f32,

    /// Examples per training batch
    #[arg(long, default_value_t = 100, value_parser = positive_usize)]
    batch_size: usize,

    /// Number of passes over the training split
    #[arg(long, default_value_t = 3, value_parser = positive_usize)]
    epochs: usize,

    /// Seed for weight initialization (entropy-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn positive_f32(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("{s:?} is not a number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{value} is not a positive number"))
    }
}

fn positive_usize(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("{s:?} is not a positive integer"))?;
    if value > 0 {
        Ok(value)
    } else {
        Err("value must be at least 1".to_string())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> reconocer::Result<()> {
    let arch = Architecture::parse(&cli.architecture)?;
    if arch.was_corrected() {
        eprintln!(
            "note: architecture {:?} corrected to {arch} (input and output widths are fixed)",
            cli.architecture
        );
    }

    let mnist = Mnist::load(&cli.data_dir)?;
    let mut model = Mlp::with_seed(&arch, cli.learning_rate, cli.seed)?;

    for epoch in 0..cli.epochs {
        model.train_epoch(&mnist.train, cli.batch_size)?;
        let eval = model.evaluate(&mnist.test, cli.batch_size)?;
        println!(
            "Epoch: {}, Accuracy: {}, Corrects: {}",
            epoch + 1,
            eval.accuracy,
            eval.correct
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["rec", "--data-dir", "/tmp/mnist"]);
        assert_eq!(cli.architecture, "784-128-10");
        assert!((cli.learning_rate - 0.1).abs() < 1e-6);
        assert_eq!(cli.batch_size, 100);
        assert_eq!(cli.epochs, 3);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_cli_rejects_non_positive_hyperparameters() {
        assert!(Cli::try_parse_from(["rec", "--data-dir", "d", "--learning-rate", "0"]).is_err());
        assert!(Cli::try_parse_from(["rec", "--data-dir", "d", "--learning-rate", "-1"]).is_err());
        assert!(Cli::try_parse_from(["rec", "--data-dir", "d", "--batch-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["rec", "--data-dir", "d", "--epochs", "0"]).is_err());
    }

    #[test]
    fn test_cli_requires_data_dir() {
        assert!(Cli::try_parse_from(["rec"]).is_err());
    }
}
