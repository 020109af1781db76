//! Form-level checks applied before a brew reaches the store.

use brewlog_core::NewBrewEntry;

/// Bean mass range offered by the entry form, in grams.
pub const GRAMS_RANGE: std::ops::RangeInclusive<f64> = 5.0..=50.0;

/// Check a brew the way the entry form does.
///
/// The store accepts anything; this is where required fields and ranges
/// are enforced.
pub fn validate_brew_form(new: &NewBrewEntry) -> anyhow::Result<()> {
    new.validate().map_err(|e| anyhow::anyhow!("{}", e))?;
    if !GRAMS_RANGE.contains(&new.grams_used) {
        return Err(anyhow::anyhow!(
            "Grams used must be between {} and {} (got {})",
            GRAMS_RANGE.start(),
            GRAMS_RANGE.end(),
            new.grams_used
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_form_defaults() {
        assert!(validate_brew_form(&NewBrewEntry::new("Latte", "Espresso", 3, 15.0, 30)).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_grams() {
        let err = validate_brew_form(&NewBrewEntry::new("Latte", "Espresso", 3, 60.0, 30))
            .unwrap_err()
            .to_string();
        assert!(err.contains("between 5 and 50"));
    }

    #[test]
    fn test_rejects_core_violations() {
        assert!(validate_brew_form(&NewBrewEntry::new("", "Espresso", 3, 15.0, 30)).is_err());
        assert!(validate_brew_form(&NewBrewEntry::new("Latte", "Espresso", 9, 15.0, 30)).is_err());
    }
}
