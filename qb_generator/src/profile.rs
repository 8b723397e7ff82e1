use qb_core::types::QuantLevel;

/// How a quant level degrades a model relative to FP16.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantProfile {
    pub quant: QuantLevel,
    /// Center of the per-benchmark retention draw, in percent.
    pub retention_mid: f64,
    /// Half-width of the retention draw.
    pub retention_range: f64,
    pub size_multiplier: f64,
    pub speed_multiplier: f64,
}

impl QuantProfile {
    pub fn for_level(quant: QuantLevel) -> Self {
        let (retention_mid, retention_range, size_multiplier, speed_multiplier) = match quant {
            QuantLevel::FP16 => (100.0, 0.0, 1.0, 1.0),
            QuantLevel::Q8_0 => (98.75, 0.75, 0.53, 1.4),
            QuantLevel::Q6_K => (97.0, 1.0, 0.41, 1.65),
            QuantLevel::Q5_K_M => (95.5, 1.5, 0.36, 1.85),
            QuantLevel::Q4_K_M => (93.0, 2.0, 0.3, 2.1),
            QuantLevel::Q3_K_M => (87.5, 2.5, 0.24, 2.4),
            QuantLevel::IQ2_XXS => (77.5, 4.5, 0.17, 2.8),
            QuantLevel::IQ1_S => (64.0, 6.0, 0.13, 3.2),
        };
        QuantProfile {
            quant,
            retention_mid,
            retention_range,
            size_multiplier,
            speed_multiplier,
        }
    }

    /// Clamp window for a drawn retention: one point of slack past the nominal
    /// range on both sides, capped at 100 on the high side only.
    pub fn retention_bounds(&self) -> (f64, f64) {
        let low = self.retention_mid - self.retention_range - 1.0;
        let high = (self.retention_mid + self.retention_range + 1.0).min(100.0);
        (low, high)
    }
}

pub fn all_profiles() -> impl Iterator<Item = QuantProfile> {
    QuantLevel::ALL.into_iter().map(QuantProfile::for_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_non_increasing_with_aggressiveness() {
        let profiles: Vec<_> = all_profiles().collect();
        assert_eq!(profiles.len(), QuantLevel::ALL.len());
        for pair in profiles.windows(2) {
            assert!(pair[0].retention_mid >= pair[1].retention_mid);
            assert!(pair[0].size_multiplier >= pair[1].size_multiplier);
            assert!(pair[0].speed_multiplier <= pair[1].speed_multiplier);
        }
    }

    #[test]
    fn test_baseline_has_no_variance() {
        let fp16 = QuantProfile::for_level(QuantLevel::FP16);
        assert_eq!(fp16.retention_mid, 100.0);
        assert_eq!(fp16.retention_range, 0.0);
    }

    #[test]
    fn test_bounds_keep_the_asymmetric_slack() {
        assert_eq!(
            QuantProfile::for_level(QuantLevel::Q4_K_M).retention_bounds(),
            (90.0, 96.0)
        );
        assert_eq!(
            QuantProfile::for_level(QuantLevel::Q8_0).retention_bounds(),
            (97.0, 100.0)
        );
        assert_eq!(
            QuantProfile::for_level(QuantLevel::IQ1_S).retention_bounds(),
            (57.0, 71.0)
        );
    }
}
