//! Risk tiers assigned to a workation by its length.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Stays up to this many days carry no risk.
pub const NO_RISK_MAX_DAYS: i32 = 50;
/// Stays up to this many days carry low risk; anything longer is high risk.
pub const LOW_RISK_MAX_DAYS: i32 = 100;

/// Compliance risk tier of a workation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Risk {
    NoRisk,
    LowRisk,
    HighRisk,
}

impl Risk {
    /// Classifies a stay of `days` days.
    ///
    /// Zero and negative durations fall into the first bracket and are
    /// reported as [`Risk::NoRisk`].
    pub fn from_days(days: i32) -> Self {
        if days <= NO_RISK_MAX_DAYS {
            Risk::NoRisk
        } else if days <= LOW_RISK_MAX_DAYS {
            Risk::LowRisk
        } else {
            Risk::HighRisk
        }
    }

    /// Wire name of the tier, e.g. `LOW_RISK`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Risk::NoRisk => "NO_RISK",
            Risk::LowRisk => "LOW_RISK",
            Risk::HighRisk => "HIGH_RISK",
        }
    }
}

impl Display for Risk {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Risk {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NO_RISK" => Ok(Risk::NoRisk),
            "LOW_RISK" => Ok(Risk::LowRisk),
            "HIGH_RISK" => Ok(Risk::HighRisk),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown risk level `{other}`"
            ))),
        }
    }
}

impl TryFrom<String> for Risk {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
