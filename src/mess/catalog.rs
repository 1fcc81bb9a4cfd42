use crate::{
    error::{ClaimError, Result},
    mess::types::{MealDefinition, MealKind, TimeOfDay},
};

/// The standard four-meal day served by every mess. Fixed at compile time;
/// nothing creates or mutates catalog entries at runtime.
pub const STANDARD_MEALS: [MealDefinition; 4] = [
    MealDefinition {
        sequence_index: 1,
        kind: MealKind::Breakfast,
        official_start: TimeOfDay::new(7, 30),
        official_end: TimeOfDay::new(9, 0),
        grace_minutes: 10,
    },
    MealDefinition {
        sequence_index: 2,
        kind: MealKind::Lunch,
        official_start: TimeOfDay::new(12, 30),
        official_end: TimeOfDay::new(14, 0),
        grace_minutes: 10,
    },
    MealDefinition {
        sequence_index: 3,
        kind: MealKind::Snacks,
        official_start: TimeOfDay::new(16, 0),
        official_end: TimeOfDay::new(18, 30),
        grace_minutes: 10,
    },
    MealDefinition {
        sequence_index: 4,
        kind: MealKind::Dinner,
        official_start: TimeOfDay::new(20, 30),
        official_end: TimeOfDay::new(22, 0),
        grace_minutes: 10,
    },
];

/// Validate a catalog the way the standard one is expected to be shaped.
///
/// Rejects entries with start >= end, out-of-range times, indices that are
/// not strictly ascending, and official windows that overlap. A failure here
/// is a configuration defect, not something the evaluator handles at runtime.
pub fn validate_catalog(catalog: &[MealDefinition]) -> Result<()> {
    for meal in catalog {
        if !meal.official_start.is_valid() || !meal.official_end.is_valid() {
            return Err(ClaimError::Config(format!(
                "{}: time of day out of range",
                meal.kind
            )));
        }
        if meal.official_start >= meal.official_end {
            return Err(ClaimError::Config(format!(
                "{}: official start {} is not before end {}",
                meal.kind, meal.official_start, meal.official_end
            )));
        }
    }

    for pair in catalog.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.sequence_index >= next.sequence_index {
            return Err(ClaimError::Config(format!(
                "catalog not ordered: {} (#{}) before {} (#{})",
                prev.kind, prev.sequence_index, next.kind, next.sequence_index
            )));
        }
        if prev.official_end > next.official_start {
            return Err(ClaimError::Config(format!(
                "official windows overlap: {} ends {} after {} starts {}",
                prev.kind, prev.official_end, next.kind, next.official_start
            )));
        }
    }

    Ok(())
}

/// Look up a catalog entry by meal kind
pub fn find_meal(catalog: &[MealDefinition], kind: MealKind) -> Option<&MealDefinition> {
    catalog.iter().find(|m| m.kind == kind)
}
