//! Plain-text salary report.

use std::io::{self, Write};

use rust_decimal::Decimal;
use salary_core::SalaryBreakdown;

use crate::format::format_amount;

const RULE: &str = "--------------------------------------";
const BANNER_RULE: &str = "======================================";

/// Writes the title banner shown before the prompt.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "     KR Actual Salary (간편 계산기)     ")?;
    writeln!(out, "{BANNER_RULE}")
}

/// Writes the gross, deduction and net pay sections of `breakdown`.
pub fn write_report<W: Write>(
    out: &mut W,
    breakdown: &SalaryBreakdown,
) -> io::Result<()> {
    let amount = |value: Decimal| format_amount(value, &breakdown.currency);
    let deductions = &breakdown.deductions;

    writeln!(out, "{RULE}")?;
    writeln!(out, "연봉(총액): {}", amount(breakdown.gross.annual))?;
    writeln!(out, "월 총액   : {}", amount(breakdown.gross.monthly_total))?;
    writeln!(out, "비과세(월): {}", amount(breakdown.non_taxable.monthly))?;
    writeln!(out, "과세급여(월): {}", amount(breakdown.taxable_base.monthly))?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "공제(월):")?;
    for line in &deductions.monthly {
        writeln!(out, "  - {}: {}", line.label, amount(line.amount))?;
    }
    writeln!(out, "  - (소계) 사회보험 합계: {}", amount(deductions.monthly_social))?;
    writeln!(out, "  - (소계) 소득세/지방세: {}", amount(deductions.monthly_taxes))?;
    writeln!(out, "  - (소계) 공제 합계   : {}", amount(deductions.monthly_total))?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "월 실수령액: {}", amount(breakdown.net.monthly))?;
    writeln!(out, "연 실수령액: {}", amount(breakdown.net.annual))?;
    writeln!(out, "{RULE}")
}
