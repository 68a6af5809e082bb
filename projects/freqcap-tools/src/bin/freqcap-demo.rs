use freqcap::filter_by_threshold;
use freqcap_cli::prelude::*;

fn main() -> Result<(), log::SetLoggerError> {
    let opts: Opts = Opts::parse();
    opts.verbose.init_logging()?;

    let data = [1, 2, 3, 4, 5];
    let threshold = 3;

    log::info!("Filtering {:?} with threshold {}", data, threshold);
    println!("{:?}", filter_by_threshold(&data, threshold));

    Ok(())
}

#[derive(Debug, Parser)]
#[clap(name = "freqcap-demo", version)]
struct Opts {
    #[clap(flatten)]
    verbose: Verbosity,
}
