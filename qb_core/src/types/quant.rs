use crate::error::{ErrorCore, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quantization levels, ordered from highest fidelity to most aggressive.
///
/// The variant names are the exact identifiers used in the results document.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuantLevel {
    FP16,
    Q8_0,
    Q6_K,
    Q5_K_M,
    Q4_K_M,
    Q3_K_M,
    IQ2_XXS,
    IQ1_S,
}

impl QuantLevel {
    pub const ALL: [QuantLevel; 8] = [
        QuantLevel::FP16,
        QuantLevel::Q8_0,
        QuantLevel::Q6_K,
        QuantLevel::Q5_K_M,
        QuantLevel::Q4_K_M,
        QuantLevel::Q3_K_M,
        QuantLevel::IQ2_XXS,
        QuantLevel::IQ1_S,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuantLevel::FP16 => "FP16",
            QuantLevel::Q8_0 => "Q8_0",
            QuantLevel::Q6_K => "Q6_K",
            QuantLevel::Q5_K_M => "Q5_K_M",
            QuantLevel::Q4_K_M => "Q4_K_M",
            QuantLevel::Q3_K_M => "Q3_K_M",
            QuantLevel::IQ2_XXS => "IQ2_XXS",
            QuantLevel::IQ1_S => "IQ1_S",
        }
    }

    /// The unquantized reference level every retention figure is measured against.
    pub fn is_baseline(&self) -> bool {
        matches!(self, QuantLevel::FP16)
    }
}

impl fmt::Display for QuantLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantLevel {
    type Err = ErrorCore;

    fn from_str(s: &str) -> Result<Self> {
        QuantLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ErrorCore::UnknownQuant(s.to_string()))
    }
}
