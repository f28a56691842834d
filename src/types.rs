use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::interest::CompoundingFrequency;

/// unique identifier for an account
pub type AccountId = Uuid;

/// how interest accrues on an account
///
/// the compounding frequency only exists on the compound variant, so a simple
/// account can never carry a stray frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "frequency", rename_all = "snake_case")]
pub enum InterestMode {
    /// principal * rate * days / 365
    #[default]
    Simple,
    /// principal * (1 + r/n)^(n * days/365) - principal
    Compound(CompoundingFrequency),
}

impl InterestMode {
    /// compounding frequency in effect; simple interest behaves as yearly (n = 1)
    pub fn frequency(&self) -> CompoundingFrequency {
        match self {
            InterestMode::Simple => CompoundingFrequency::Yearly,
            InterestMode::Compound(frequency) => *frequency,
        }
    }

    /// build from the loose labels used by data-entry forms ("simple", "compound")
    pub fn from_labels(mode: &str, frequency: Option<&str>) -> Option<Self> {
        match mode.trim().to_ascii_lowercase().as_str() {
            "simple" => Some(InterestMode::Simple),
            "compound" => Some(InterestMode::Compound(
                frequency
                    .map(CompoundingFrequency::from_label)
                    .unwrap_or_default(),
            )),
            _ => None,
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, InterestMode::Compound(_))
    }
}
