use super::BenchConfig;

/// A named sweep preset.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchProfile {
    pub name: &'static str,
    pub config: BenchConfig,
}

/// Sizes 1..=100, 10 trials each.
pub fn quick_profile() -> BenchProfile {
    BenchProfile {
        name: "quick",
        config: BenchConfig {
            min_size: 1,
            max_size: 100,
            trials: 10,
            ..BenchConfig::default()
        },
    }
}

/// Sizes 1..=250, 100 trials each.
pub fn standard_profile() -> BenchProfile {
    BenchProfile {
        name: "standard",
        config: BenchConfig {
            min_size: 1,
            max_size: 250,
            trials: 100,
            ..BenchConfig::default()
        },
    }
}

/// Sizes 1..=1000, 1000 trials each.
pub fn thorough_profile() -> BenchProfile {
    BenchProfile {
        name: "thorough",
        config: BenchConfig {
            min_size: 1,
            max_size: 1000,
            trials: 1000,
            ..BenchConfig::default()
        },
    }
}

/// Lookup a profile by name.
pub fn get_profile(name: &str) -> Option<BenchProfile> {
    match name {
        "quick" => Some(quick_profile()),
        "standard" => Some(standard_profile()),
        "thorough" => Some(thorough_profile()),
        _ => None,
    }
}
