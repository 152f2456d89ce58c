use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use salary_cli::{app, logging};
use salary_core::SalaryCalculator;

/// Korean take-home pay calculator.
///
/// Asks for an annual salary in units of 10,000 KRW and prints the monthly
/// social insurance, income tax and net pay.
#[derive(Debug, Parser)]
#[command(name = "kr-salary", version, about)]
struct Cli {
    /// TOML policy file replacing the built-in 2025 policy.
    #[arg(long)]
    policy: Option<PathBuf>,

    /// CSV tax bracket table (up_to,rate,deduction) replacing the policy's brackets.
    #[arg(long)]
    brackets: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    logging::init_tracing();

    let cli = Cli::parse();

    let policy = app::load_policy(cli.policy.as_deref(), cli.brackets.as_deref())?;
    let calculator = SalaryCalculator::new(&policy).context("Policy is invalid")?;

    let status = app::run(
        &calculator,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(ExitCode::from(status))
}
