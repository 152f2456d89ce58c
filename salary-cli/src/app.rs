use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use salary_core::{PolicyConfig, SalaryCalculator};
use salary_data::{PolicyLoader, TaxBracketLoader};
use tracing::{debug, info};

use crate::input::parse_annual_salary;
use crate::report::{write_banner, write_report};

/// Exit status after a report is printed.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when the typed salary is rejected.
pub const EXIT_INVALID_INPUT: u8 = 1;

/// Builds the policy for this run.
///
/// Starts from the TOML document at `policy_path` or the built-in
/// [`PolicyConfig::kr_2025`], then swaps in the CSV bracket table at
/// `brackets_path` if one is given. Both loaders validate what they read;
/// [`SalaryCalculator::new`](salary_core::SalaryCalculator::new) validates
/// the combined policy.
pub fn load_policy(
    policy_path: Option<&Path>,
    brackets_path: Option<&Path>,
) -> Result<PolicyConfig> {
    let mut policy = match policy_path {
        Some(path) => PolicyLoader::from_path(path)
            .with_context(|| format!("Failed to load policy: {}", path.display()))?,
        None => {
            debug!("using built-in 2025 policy");
            PolicyConfig::kr_2025()
        }
    };

    if let Some(path) = brackets_path {
        policy.tax.brackets = TaxBracketLoader::from_path(path)
            .with_context(|| format!("Failed to load tax brackets: {}", path.display()))?;
        info!(count = policy.tax.brackets.len(), "replaced tax brackets");
    }

    Ok(policy)
}

/// Prints the banner and prompt, then reads one line of input.
///
/// Returns an empty string at end of input.
pub fn prompt_salary<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<String> {
    write_banner(out)?;
    write!(out, "연봉을 \"만원 단위\"로 입력해주세요 (예: 5000) > ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Runs one prompt, parse and report session and returns the exit status.
///
/// Rejected input writes its message to `err` and returns
/// [`EXIT_INVALID_INPUT`] without calculating anything.
pub fn run<R: BufRead, W: Write, E: Write>(
    calculator: &SalaryCalculator<'_>,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> io::Result<u8> {
    let line = prompt_salary(input, out)?;

    let annual_gross = match parse_annual_salary(&line) {
        Ok(amount) => amount,
        Err(error) => {
            writeln!(err, "{error}")?;
            return Ok(EXIT_INVALID_INPUT);
        }
    };
    debug!(%annual_gross, "calculating");

    write_report(out, &calculator.calculate(annual_gross))?;
    Ok(EXIT_SUCCESS)
}
