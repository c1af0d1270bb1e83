//! Level-scaled protection radius

use crate::domain::ProtectionTierConfig;

/// Zero-based tier index of a level; levels below 1 count as level 1.
///
/// A `level_tier_size` of 0 means a single unbounded tier.
pub fn tier_index(level: i32, config: &ProtectionTierConfig) -> u32 {
    if config.level_tier_size == 0 {
        return 0;
    }
    let level = level.max(1) as u32;
    (level - 1) / config.level_tier_size
}

/// Protection radius in meters for a guild of the given level.
///
/// `base + increase * floor((level - 1) / tier_size)`, saturating at `u32::MAX`.
pub fn protection_radius_meters(level: i32, config: &ProtectionTierConfig) -> u32 {
    let steps = tier_index(level, config);
    config
        .radius_increase_per_level_tier
        .saturating_mul(steps)
        .saturating_add(config.base_radius_meters)
}

/// First and last level of a tier (inclusive); `None` for the last level of an unbounded tier.
pub fn tier_level_range(tier: u32, config: &ProtectionTierConfig) -> (u32, Option<u32>) {
    if config.level_tier_size == 0 {
        return (1, None);
    }
    let first = tier.saturating_mul(config.level_tier_size).saturating_add(1);
    let last = first.saturating_add(config.level_tier_size - 1);
    (first, Some(last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DEFAULT: ProtectionTierConfig = ProtectionTierConfig::DEFAULT;

    #[rstest]
    #[case(1, 100)]
    #[case(10, 100)]
    #[case(11, 120)]
    #[case(15, 120)]
    #[case(20, 120)]
    #[case(21, 140)]
    #[case(100, 280)]
    fn given_default_config_when_computing_radius_then_steps_per_tier(
        #[case] level: i32,
        #[case] expected: u32,
    ) {
        assert_eq!(protection_radius_meters(level, &DEFAULT), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    #[case(i32::MIN)]
    fn given_level_below_one_when_computing_radius_then_clamped_to_level_one(#[case] level: i32) {
        assert_eq!(
            protection_radius_meters(level, &DEFAULT),
            protection_radius_meters(1, &DEFAULT)
        );
    }

    #[test]
    fn given_levels_in_same_tier_then_equal_radius() {
        let config = ProtectionTierConfig::new(50, 7, 4);
        for tier in 0..20u32 {
            let first = (tier * 4 + 1) as i32;
            let expected = protection_radius_meters(first, &config);
            for level in first..first + 4 {
                assert_eq!(protection_radius_meters(level, &config), expected);
            }
        }
    }

    #[test]
    fn given_consecutive_tiers_then_radius_differs_by_increase() {
        let config = ProtectionTierConfig::new(50, 7, 4);
        for level in 1..200 {
            let next_tier_level = level + config.level_tier_size as i32;
            assert_eq!(
                protection_radius_meters(next_tier_level, &config),
                protection_radius_meters(level, &config) + config.radius_increase_per_level_tier
            );
        }
    }

    #[rstest]
    #[case(ProtectionTierConfig::DEFAULT)]
    #[case(ProtectionTierConfig::new(0, 0, 1))]
    #[case(ProtectionTierConfig::new(10, 1, 1))]
    #[case(ProtectionTierConfig::new(500, 250, 3))]
    #[case(ProtectionTierConfig::new(100, 20, 0))]
    fn given_any_config_then_radius_non_decreasing(#[case] config: ProtectionTierConfig) {
        let mut previous = protection_radius_meters(-3, &config);
        for level in -2..500 {
            let radius = protection_radius_meters(level, &config);
            assert!(radius >= previous, "level {level}: {radius} < {previous}");
            previous = radius;
        }
    }

    #[test]
    fn given_zero_tier_size_when_computing_radius_then_base_only() {
        let config = ProtectionTierConfig::new(100, 20, 0);
        assert_eq!(protection_radius_meters(1, &config), 100);
        assert_eq!(protection_radius_meters(1_000, &config), 100);
        assert_eq!(tier_level_range(0, &config), (1, None));
    }

    #[test]
    fn given_huge_increase_when_computing_radius_then_saturates() {
        let config = ProtectionTierConfig::new(10, u32::MAX, 1);
        assert_eq!(protection_radius_meters(3, &config), u32::MAX);
    }

    #[test]
    fn given_tier_when_computing_range_then_inclusive_bounds() {
        assert_eq!(tier_level_range(0, &DEFAULT), (1, Some(10)));
        assert_eq!(tier_level_range(1, &DEFAULT), (11, Some(20)));
        assert_eq!(tier_index(11, &DEFAULT), 1);
        assert_eq!(tier_index(10, &DEFAULT), 0);
    }
}
