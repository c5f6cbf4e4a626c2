mod datasets;

use std::io::{prelude::*, stdin, stdout};

use clap::{Parser, Subcommand};
use minilearn::{Label, LinearClassifier, Prediction, TextClassifier};

use crate::datasets::{MESSAGES, OR_INPUTS, OR_TARGETS};

#[derive(Parser, Debug)]
#[command(
    about = "Demonstrations of a perceptron and a Naive Bayes text classifier.",
    long_about = "Demonstrations of a perceptron and a Naive Bayes text classifier.\n\
                  Without a subcommand, a menu is read from stdin."
)]
struct Args {
    #[command(subcommand)]
    demo: Option<Demo>,
}

#[derive(Subcommand, Debug)]
enum Demo {
    /// Trains a spam filter and classifies each line read from stdin
    Text,

    /// Trains a perceptron on the OR truth table
    Perceptron(PerceptronArgs),
}

#[derive(clap::Args, Debug)]
struct PerceptronArgs {
    /// The learning rate
    #[arg(long, default_value = "0.2")]
    rate: f64,

    /// The maximum number of epochs
    #[arg(long, default_value = "25")]
    epochs: usize,

    /// A comma-separated input to classify after training
    #[arg(long, value_delimiter = ',', default_value = "1,0")]
    custom: Vec<f64>,
}

impl Default for PerceptronArgs {
    fn default() -> Self {
        Self {
            rate: 0.2,
            epochs: 25,
            custom: vec![1.0, 0.0],
        }
    }
}

fn run_perceptron(args: &PerceptronArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut model = LinearClassifier::new(OR_INPUTS[0].len(), args.rate)?;

    println!("training perceptron on OR logic");
    let report = model.fit_with_callback(&OR_INPUTS, &OR_TARGETS, args.epochs, |r| {
        println!("epoch {} errors {}", r.epoch, r.n_errors)
    })?;
    if let Some(epoch) = report.converged_epoch() {
        println!("converged early at epoch {}", epoch);
    }
    println!("{}", model.params());

    println!("\npredictions");
    for (xs, target) in OR_INPUTS.iter().zip(OR_TARGETS) {
        let out = model.predict(xs)?;
        println!("{} OR {} = {} (target {})", xs[0], xs[1], out, target);
    }

    let guess = model.predict(&args.custom)?;
    let custom: Vec<_> = args.custom.iter().map(|x| x.to_string()).collect();
    println!("\ncustom input {} -> {}", custom.join(" "), guess);

    Ok(())
}

fn run_text<I>(lines: &mut I) -> Result<(), Box<dyn std::error::Error>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    println!("training a tiny text model (spam vs not spam)");
    let mut model = TextClassifier::new();
    model.fit(&MESSAGES)?;

    println!("type a message and press enter (empty line to exit)\n");
    loop {
        print!("> ");
        stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.is_empty() {
            break;
        }
        let prediction = model.predict_with_score(&line);
        if let Prediction::Degenerate(reason) = prediction {
            println!("{}", reason);
        }
        match prediction.label() {
            Label::Positive => println!("guess: spam\n"),
            Label::Negative => println!("guess: not spam\n"),
        }
    }
    println!("done");

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let args = Args::parse();

    let stdin = stdin();
    let mut lines = stdin.lock().lines();

    let demo = match args.demo {
        Some(demo) => demo,
        None => {
            println!("choose a demo");
            println!("1) text naive bayes");
            println!("2) perceptron logic");
            print!("> ");
            stdout().flush()?;
            let pick = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };
            match pick.trim() {
                "1" => Demo::Text,
                "2" => Demo::Perceptron(PerceptronArgs::default()),
                _ => {
                    println!("no such choice");
                    return Ok(());
                }
            }
        }
    };

    log::debug!("running {:?}", demo);
    match demo {
        Demo::Text => run_text(&mut lines),
        Demo::Perceptron(args) => run_perceptron(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_perceptron_args() {
        let args = Args::try_parse_from(["demo", "perceptron", "--rate", "0.5", "--custom", "0,1"])
            .unwrap();

        match args.demo {
            Some(Demo::Perceptron(args)) => {
                assert_eq!(0.5, args.rate);
                assert_eq!(25, args.epochs);
                assert_eq!(vec![0.0, 1.0], args.custom);
            }
            _ => panic!("unexpected subcommand"),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["demo"]).unwrap();

        assert!(args.demo.is_none());
    }
}
