use crate::error::{ErrorCore, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five evaluation suites every quant level is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkKey {
    Ifeval,
    Bbh,
    Gpqa,
    Musr,
    Hle,
}

impl BenchmarkKey {
    pub const ALL: [BenchmarkKey; 5] = [
        BenchmarkKey::Ifeval,
        BenchmarkKey::Bbh,
        BenchmarkKey::Gpqa,
        BenchmarkKey::Musr,
        BenchmarkKey::Hle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BenchmarkKey::Ifeval => "ifeval",
            BenchmarkKey::Bbh => "bbh",
            BenchmarkKey::Gpqa => "gpqa",
            BenchmarkKey::Musr => "musr",
            BenchmarkKey::Hle => "hle",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BenchmarkKey::Ifeval => "IFEval",
            BenchmarkKey::Bbh => "BBH",
            BenchmarkKey::Gpqa => "GPQA Diamond",
            BenchmarkKey::Musr => "MuSR",
            BenchmarkKey::Hle => "HLE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BenchmarkKey::Ifeval => "Instruction following",
            BenchmarkKey::Bbh => "Complex reasoning",
            BenchmarkKey::Gpqa => "Graduate-level science",
            BenchmarkKey::Musr => "Multistep reasoning",
            BenchmarkKey::Hle => "Expert-level ceiling",
        }
    }

    /// Number of questions in the suite.
    pub fn questions(&self) -> u32 {
        match self {
            BenchmarkKey::Ifeval => 500,
            BenchmarkKey::Bbh => 6500,
            BenchmarkKey::Gpqa => 198,
            BenchmarkKey::Musr => 750,
            BenchmarkKey::Hle => 2500,
        }
    }
}

impl fmt::Display for BenchmarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BenchmarkKey {
    type Err = ErrorCore;

    fn from_str(s: &str) -> Result<Self> {
        BenchmarkKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ErrorCore::UnknownBenchmark(s.to_string()))
    }
}

/// One value per benchmark. Used both for absolute scores and for retention
/// percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BenchmarkScores {
    pub ifeval: f64,
    pub bbh: f64,
    pub gpqa: f64,
    pub musr: f64,
    pub hle: f64,
}

impl BenchmarkScores {
    pub fn from_fn(mut f: impl FnMut(BenchmarkKey) -> f64) -> Self {
        let mut scores = BenchmarkScores::default();
        for key in BenchmarkKey::ALL {
            scores.set(key, f(key));
        }
        scores
    }

    pub fn get(&self, key: BenchmarkKey) -> f64 {
        match key {
            BenchmarkKey::Ifeval => self.ifeval,
            BenchmarkKey::Bbh => self.bbh,
            BenchmarkKey::Gpqa => self.gpqa,
            BenchmarkKey::Musr => self.musr,
            BenchmarkKey::Hle => self.hle,
        }
    }

    pub fn set(&mut self, key: BenchmarkKey, value: f64) {
        let slot = match key {
            BenchmarkKey::Ifeval => &mut self.ifeval,
            BenchmarkKey::Bbh => &mut self.bbh,
            BenchmarkKey::Gpqa => &mut self.gpqa,
            BenchmarkKey::Musr => &mut self.musr,
            BenchmarkKey::Hle => &mut self.hle,
        };
        *slot = value;
    }

    /// Values in `BenchmarkKey::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (BenchmarkKey, f64)> + '_ {
        BenchmarkKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    /// Unweighted mean of the five values.
    pub fn mean(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum::<f64>() / BenchmarkKey::ALL.len() as f64
    }
}
