use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a progressive income tax table.
///
/// `deduction` is the cumulative tax owed at the previous bracket's upper
/// bound, so the tax for a base inside this bracket is
/// `(base - previous up_to) * rate + deduction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound of the bracket. `None` for the open-ended top bracket.
    #[serde(default)]
    pub up_to: Option<Decimal>,
    pub rate: Decimal,
    pub deduction: Decimal,
}

impl TaxBracket {
    /// Returns true if `base` falls at or below this bracket's upper bound.
    pub fn contains(
        &self,
        base: Decimal,
    ) -> bool {
        self.up_to.is_none_or(|up_to| base <= up_to)
    }
}
