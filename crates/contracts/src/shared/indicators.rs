use serde::{Deserialize, Serialize};

/// How a summary value is rendered on a stat card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    /// Platform currency (Central African CFA franc).
    pub fn fcfa() -> Self {
        ValueFormat::Money {
            currency: "FCFA".to_string(),
        }
    }
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}
