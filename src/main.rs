use clap::Parser;
use unique_words::cli::Cli;
use unique_words::run;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}
