//! Brew entry model.
//!
//! `BrewEntry` is the only persisted record. Entries are write-once: the
//! store assigns the id and timestamp from a `NewBrewEntry` and nothing
//! mutates them afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BrewLogError, Result};

/// One logged brew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewEntry {
    /// Unique identifier for this entry
    pub id: Uuid,

    /// When this entry was created
    #[serde(alias = "date", deserialize_with = "crate::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,

    /// Coffee or drink name (e.g., "Pourover", "Flat white")
    #[serde(rename = "type")]
    pub brew_type: String,

    /// Brew method (e.g., "V60", "AeroPress")
    pub brew_method: String,

    /// Rating, 1 to 5 by convention
    pub rating: u8,

    /// Bean mass in grams
    pub grams_used: f64,

    /// Pour time in seconds
    pub pour_time_seconds: u32,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::timestamp::deserialize_option"
    )]
    pub stop_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Bean origin (country or farm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Bean variety or roast descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coffee_type: Option<String>,

    /// Growing altitude in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude_meters: Option<i32>,
}

impl BrewEntry {
    /// Short display form of the id (first 8 hex characters).
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// Builder for creating new entries.
///
/// The store fills in the id and, unless overridden, the creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBrewEntry {
    pub brew_type: String,
    pub brew_method: String,
    pub rating: u8,
    pub grams_used: f64,
    pub pour_time_seconds: u32,
    pub stop_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub origin: Option<String>,
    pub coffee_type: Option<String>,
    pub altitude_meters: Option<i32>,

    /// Optional: backdated creation time
    pub created_at: Option<DateTime<Utc>>,
}

impl NewBrewEntry {
    pub fn new(
        brew_type: impl Into<String>,
        brew_method: impl Into<String>,
        rating: u8,
        grams_used: f64,
        pour_time_seconds: u32,
    ) -> Self {
        Self {
            brew_type: brew_type.into(),
            brew_method: brew_method.into(),
            rating,
            grams_used,
            pour_time_seconds,
            stop_time: None,
            notes: None,
            origin: None,
            coffee_type: None,
            altitude_meters: None,
            created_at: None,
        }
    }

    pub fn with_stop_time(mut self, stop_time: DateTime<Utc>) -> Self {
        self.stop_time = Some(stop_time);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_coffee_type(mut self, coffee_type: impl Into<String>) -> Self {
        self.coffee_type = Some(coffee_type.into());
        self
    }

    pub fn with_altitude_meters(mut self, altitude_meters: i32) -> Self {
        self.altitude_meters = Some(altitude_meters);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Check the constraints the entry form enforces before calling `add`.
    ///
    /// The store itself never calls this; it accepts whatever it is given.
    pub fn validate(&self) -> Result<()> {
        if self.brew_type.trim().is_empty() {
            return Err(BrewLogError::Validation(
                "Coffee type must not be empty".to_string(),
            ));
        }
        if self.brew_method.trim().is_empty() {
            return Err(BrewLogError::Validation(
                "Brew method must not be empty".to_string(),
            ));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(BrewLogError::Validation(format!(
                "Rating must be between 1 and 5 (got {})",
                self.rating
            )));
        }
        if !self.grams_used.is_finite() || self.grams_used <= 0.0 {
            return Err(BrewLogError::Validation(format!(
                "Grams used must be positive (got {})",
                self.grams_used
            )));
        }
        Ok(())
    }

    pub(crate) fn into_entry(self, id: Uuid, now: DateTime<Utc>) -> BrewEntry {
        BrewEntry {
            id,
            created_at: self.created_at.unwrap_or(now),
            brew_type: self.brew_type,
            brew_method: self.brew_method,
            rating: self.rating,
            grams_used: self.grams_used,
            pour_time_seconds: self.pour_time_seconds,
            stop_time: self.stop_time,
            notes: self.notes,
            origin: self.origin,
            coffee_type: self.coffee_type,
            altitude_meters: self.altitude_meters,
        }
    }
}
