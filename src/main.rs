use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use covergate::coverage::Policy;
use covergate::gate;
use covergate::runner::GoTestRunner;

#[derive(Parser)]
#[command(name = "covergate")]
#[command(about = "Runs the test suite with coverage and enforces the per-package minimum")]
#[command(version)]
struct Cli {}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();

    let policy = Policy::default();
    let runner = GoTestRunner::new();
    gate::enforce(&runner, &policy)?;

    println!("{}", "Tests=PASS Coverage=PASS".green().bold());
    Ok(())
}
