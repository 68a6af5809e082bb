//! Shared argument groups for freqcap command-line tools, built on [`clap`][clap] and
//! [`simplelog`][simplelog].
//!
//! ## Example
//!
//! ```rust,no_run
//! use freqcap_cli::prelude::*;
//!
//! #[derive(Debug, Parser)]
//! #[clap(name = "demo", version)]
//! struct Opts {
//!     #[clap(flatten)]
//!     verbose: Verbosity,
//!     #[clap(flatten)]
//!     input: Input,
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let opts: Opts = Opts::parse();
//!     opts.verbose.init_logging()?;
//!     let _reader = opts.input.open()?;
//!     Ok(())
//! }
//! ```
//!
//! [clap]: https://docs.rs/clap/latest/clap/
//! [simplelog]: https://docs.rs/simplelog/latest/simplelog/

use simplelog::LevelFilter;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct Verbosity {
    /// Level of verbosity (repeat for more detail)
    #[clap(long, short = 'v', parse(from_occurrences), global = true)]
    verbose: u8,
}

impl Verbosity {
    pub fn new(verbose: u8) -> Self {
        Self { verbose }
    }

    pub fn level_filter(&self) -> LevelFilter {
        level_filter(self.verbose)
    }

    /// Log to standard error at the selected level.
    pub fn init_logging(&self) -> Result<(), log::SetLoggerError> {
        simplelog::TermLogger::init(
            self.level_filter(),
            simplelog::Config::default(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        )
    }
}

/// Where to read values from.
#[derive(clap::Args, Debug, Clone)]
pub struct Input {
    /// Input file path (standard input if omitted)
    #[clap(long, short = 'i', global = true)]
    input: Option<PathBuf>,
}

impl Input {
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Self {
        Self {
            input: path.map(|path| path.as_ref().to_path_buf()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    pub fn open(&self) -> std::io::Result<Box<dyn Read>> {
        match &self.input {
            Some(path) => {
                log::info!("Reading {:?}", path);
                Ok(Box::new(File::open(path)?))
            }
            None => {
                log::info!("Reading standard input");
                Ok(Box::new(std::io::stdin()))
            }
        }
    }
}

pub mod prelude {
    pub use super::{Input, Verbosity};
    pub use ::clap::Parser;
    pub mod clap {
        pub use clap::{
            builder, AppSettings, Arg, ArgAction, ArgMatches, Args, Command, CommandFactory, Error,
            ErrorKind, FromArgMatches, Parser, Subcommand,
        };
    }
    pub mod log {
        pub use log::{debug, error, info, warn, SetLoggerError};
    }
}

#[cfg(test)]
mod tests {
    use super::{Input, Verbosity};
    use simplelog::LevelFilter;
    use std::io::{Read, Write};

    #[test]
    fn level_filter() {
        assert_eq!(Verbosity::new(0).level_filter(), LevelFilter::Off);
        assert_eq!(Verbosity::new(1).level_filter(), LevelFilter::Error);
        assert_eq!(Verbosity::new(3).level_filter(), LevelFilter::Info);
        assert_eq!(Verbosity::new(5).level_filter(), LevelFilter::Trace);
        assert_eq!(Verbosity::new(u8::MAX).level_filter(), LevelFilter::Trace);
    }

    #[test]
    fn open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1\n2\n").unwrap();

        let input = Input::new(Some(file.path()));
        assert_eq!(input.path(), Some(file.path()));

        let mut contents = String::new();
        input.open().unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "1\n2\n");
    }

    #[test]
    fn open_missing_file() {
        let directory = tempfile::tempdir().unwrap();
        let input = Input::new(Some(directory.path().join("missing.txt")));

        assert!(input.open().is_err());
    }

    mod derived {
        use crate::prelude::*;

        #[derive(Debug, Parser)]
        #[clap(name = "derived")]
        struct Opts {
            #[clap(flatten)]
            verbose: Verbosity,
            #[clap(flatten)]
            input: Input,
            #[clap(subcommand)]
            command: Command,
        }

        #[derive(Debug, Parser)]
        enum Command {
            Run {
                #[clap(long, allow_hyphen_values = true)]
                threshold: i64,
            },
        }

        #[test]
        fn parse_with_prelude_only() {
            let opts = Opts::try_parse_from([
                "derived", "-vv", "--input", "values.txt", "run", "--threshold", "-1",
            ])
            .unwrap();

            assert_eq!(opts.verbose.level_filter(), simplelog::LevelFilter::Warn);
            assert_eq!(
                opts.input.path(),
                Some(std::path::Path::new("values.txt"))
            );
            assert!(matches!(opts.command, Command::Run { threshold: -1 }));
        }
    }

    #[test]
    fn default_is_stdin() {
        let input = Input::new(None::<&str>);

        assert!(input.path().is_none());
    }
}
