use anyhow::Result;
use clap::Parser;

use jvm_runner_cli::Runner;

fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::parse();
    runner.command.execute()
}
