use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal places kept when settling a figure. Residue from dividing by the
/// period count and multiplying back sits far below this scale.
const SETTLE_SCALE: u32 = 12;

/// Drops the division residue from `value`, so `29.999…997` becomes `30`.
pub(crate) fn settle(value: Decimal) -> Decimal {
    value.round_dp(SETTLE_SCALE)
}

/// How reported figures are brought to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    #[default]
    Floor,
    /// Half rounds toward positive infinity (`-2.5` becomes `-2`).
    #[serde(alias = "round")]
    Nearest,
    #[serde(alias = "ceil")]
    Ceiling,
}

impl RoundingMode {
    /// Rounds `value` to a whole unit after settling its division residue.
    pub fn apply(
        self,
        value: Decimal,
    ) -> Decimal {
        let value = settle(value);
        match self {
            Self::Floor => value.floor(),
            Self::Nearest => (value + Decimal::new(5, 1)).floor(),
            Self::Ceiling => value.ceil(),
        }
    }
}
