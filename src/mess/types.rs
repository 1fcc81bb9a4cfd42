use serde::{Deserialize, Serialize};

/// Wall-clock time of day (hour, minute) in the mess time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Minutes since midnight, signed so grace arithmetic can underflow
    /// below 00:00 without wrapping to the previous day
    pub const fn minutes_since_midnight(&self) -> i32 {
        self.hour as i32 * 60 + self.minute as i32
    }

    pub fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// The four meals a mess serves each day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealKind {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}

impl MealKind {
    /// Value the backend expects in the claim-meal request body
    pub fn api_name(&self) -> &'static str {
        match self {
            MealKind::Breakfast => "breakfast",
            MealKind::Lunch => "lunch",
            MealKind::Snacks => "snacks",
            MealKind::Dinner => "dinner",
        }
    }
}

impl std::fmt::Display for MealKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealKind::Breakfast => write!(f, "Breakfast"),
            MealKind::Lunch => write!(f, "Lunch"),
            MealKind::Snacks => write!(f, "Snacks"),
            MealKind::Dinner => write!(f, "Dinner"),
        }
    }
}

impl std::str::FromStr for MealKind {
    type Err = crate::error::ClaimError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealKind::Breakfast),
            "lunch" => Ok(MealKind::Lunch),
            "snacks" => Ok(MealKind::Snacks),
            "dinner" => Ok(MealKind::Dinner),
            other => Err(crate::error::ClaimError::UnknownMeal(other.to_string())),
        }
    }
}

/// A catalog entry: one meal's official serving window plus grace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDefinition {
    pub sequence_index: u8,
    pub kind: MealKind,
    pub official_start: TimeOfDay,
    pub official_end: TimeOfDay,
    pub grace_minutes: u32,
}

impl MealDefinition {
    /// Official window formatted for display, e.g. "07:30 - 09:00"
    pub fn official_timing(&self) -> String {
        format!("{} - {}", self.official_start, self.official_end)
    }
}
