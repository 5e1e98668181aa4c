use anyhow::Context;
use clap::Parser;

use link_sim::cli::Cli;
use link_sim::logging::init_logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = cli.link_config().context("invalid link parameters")?;
    let report = link_sim::simulate(config, &cli.traces).context("simulation failed")?;

    println!("{}", report);
    Ok(())
}
