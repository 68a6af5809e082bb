use freqcap::{read_lines, read_values, retain_by_threshold, Frequencies};
use freqcap_cli::prelude::*;
use serde_json::Value;
use std::fmt::Display;
use std::hash::Hash;

fn main() -> Result<(), Error> {
    let opts: Opts = Opts::parse();
    opts.verbose.init_logging()?;

    let reader = opts.input.open()?;

    if opts.numeric {
        run(read_values::<i64, _>(reader)?, &opts.command)
    } else {
        run(read_lines(reader)?, &opts.command)
    }
}

fn run<T: Eq + Hash + Clone + Display + Into<Value>>(
    mut values: Vec<T>,
    command: &Command,
) -> Result<(), Error> {
    match command {
        Command::Filter { threshold, json } => {
            let input_count = values.len();
            let removed_count = retain_by_threshold(&mut values, *threshold);

            log::info!(
                "Kept {} of {} values ({} removed) at threshold {}",
                values.len(),
                input_count,
                removed_count,
                threshold
            );

            if *json {
                let array = Value::Array(values.into_iter().map(Into::into).collect());
                println!("{}", serde_json::to_string(&array)?);
            } else {
                for value in values {
                    println!("{}", value);
                }
            }
        }
        Command::Counts => {
            let frequencies = Frequencies::from_values(&values);

            log::info!(
                "Counted {} distinct values in {} lines",
                frequencies.len(),
                frequencies.total()
            );

            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(std::io::stdout());

            for (value, count) in frequencies.iter() {
                writer.write_record([value.to_string(), count.to_string()])?;
            }

            writer.flush()?;
        }
    }

    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Input error")]
    Input(#[from] freqcap::Error),
    #[error("CSV encoding error")]
    Csv(#[from] csv::Error),
    #[error("JSON encoding error")]
    Json(#[from] serde_json::Error),
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("Log initialization error")]
    LogInitialization(#[from] log::SetLoggerError),
}

#[derive(Debug, Parser)]
#[clap(name = "freqcap", version)]
struct Opts {
    #[clap(flatten)]
    verbose: Verbosity,
    #[clap(flatten)]
    input: Input,
    /// Compare values as integers instead of raw lines
    #[clap(long, global = true)]
    numeric: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// Print each value occurring at most the given number of times, in first-occurrence order
    Filter {
        /// Maximum number of occurrences
        #[clap(long, short = 'n', allow_hyphen_values = true)]
        threshold: i64,
        /// Print a single JSON array instead of one value per line
        #[clap(long)]
        json: bool,
    },
    /// Print the occurrence count of each distinct value as CSV
    Counts,
}
