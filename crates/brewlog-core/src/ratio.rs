//! Brew ratio arithmetic.
//!
//! Ratios are expressed as grams of water per gram of coffee (1:N).

/// A named common ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioPreset {
    pub name: &'static str,
    pub ratio: f64,
}

/// Tolerance within which a ratio counts as matching a preset.
pub const PRESET_TOLERANCE: f64 = 0.1;

pub const PRESETS: &[RatioPreset] = &[
    RatioPreset { name: "Espresso", ratio: 2.0 },
    RatioPreset { name: "Ristretto", ratio: 1.5 },
    RatioPreset { name: "Lungo", ratio: 3.0 },
    RatioPreset { name: "Pour Over", ratio: 16.67 },
    RatioPreset { name: "French Press", ratio: 15.0 },
    RatioPreset { name: "AeroPress", ratio: 17.0 },
    RatioPreset { name: "Chemex", ratio: 16.0 },
    RatioPreset { name: "V60", ratio: 16.67 },
    RatioPreset { name: "Kalita Wave", ratio: 16.0 },
    RatioPreset { name: "Clever Dripper", ratio: 15.0 },
];

/// Water-to-coffee ratio. Zero when there is no coffee.
pub fn brew_ratio(coffee_grams: f64, water_grams: f64) -> f64 {
    if coffee_grams <= 0.0 {
        return 0.0;
    }
    water_grams / coffee_grams
}

/// Water needed to brew `coffee_grams` at `ratio`.
pub fn water_for(coffee_grams: f64, ratio: f64) -> f64 {
    coffee_grams * ratio
}

pub fn total_brew(coffee_grams: f64, water_grams: f64) -> f64 {
    coffee_grams + water_grams
}

/// Presets whose ratio is within `PRESET_TOLERANCE` of `ratio`.
pub fn matching_presets(ratio: f64) -> impl Iterator<Item = &'static RatioPreset> {
    PRESETS
        .iter()
        .filter(move |preset| (preset.ratio - ratio).abs() < PRESET_TOLERANCE)
}

/// Look up a preset by name, ignoring case and surrounding whitespace.
pub fn preset(name: &str) -> Option<&'static RatioPreset> {
    let name = name.trim();
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_of_defaults() {
        let ratio = brew_ratio(15.0, 250.0);
        assert!((ratio - 16.666_666).abs() < 1e-3);
        assert_eq!(total_brew(15.0, 250.0), 265.0);
    }

    #[test]
    fn test_zero_coffee_gives_zero_ratio() {
        assert_eq!(brew_ratio(0.0, 250.0), 0.0);
        assert_eq!(brew_ratio(-1.0, 250.0), 0.0);
    }

    #[test]
    fn test_preset_water() {
        let chemex = preset("chemex").unwrap();
        assert_eq!(water_for(30.0, chemex.ratio), 480.0);
        assert!(preset("Turkish").is_none());
    }

    #[test]
    fn test_matching_presets() {
        let names: Vec<_> = matching_presets(brew_ratio(15.0, 250.0))
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Pour Over", "V60"]);
        assert_eq!(matching_presets(9.0).count(), 0);
    }
}
