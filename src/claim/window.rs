use crate::mess::types::{MealDefinition, TimeOfDay};

/// Eligibility of one catalog entry at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealAvailability {
    pub meal: MealDefinition,
    pub claimable: bool,
}

/// Pure claim-window arithmetic. Holds no state and reads no clock; callers
/// pass the current IST wall-clock time and re-invoke on refresh.
pub struct WindowEvaluator;

impl WindowEvaluator {
    /// Whether `meal` can be claimed at `now` (IST wall-clock).
    ///
    /// The window is the official serving time widened by `grace_minutes` on
    /// both sides, inclusive at both ends. Arithmetic is naive minutes since
    /// midnight: a window that would underflow past 00:00 or overflow past
    /// 23:59 is clamped by the signed comparison, it never wraps onto the
    /// neighbouring day.
    pub fn is_claimable(meal: &MealDefinition, now: TimeOfDay) -> bool {
        let grace = meal.grace_minutes as i32;
        let window_start = meal.official_start.minutes_since_midnight() - grace;
        let window_end = meal.official_end.minutes_since_midnight() + grace;
        let now = now.minutes_since_midnight();

        window_start <= now && now <= window_end
    }

    /// Evaluate every catalog entry at `now`, preserving catalog order.
    /// Windows are independent; overlapping eligibility is not reconciled.
    pub fn evaluate_all(catalog: &[MealDefinition], now: TimeOfDay) -> Vec<MealAvailability> {
        catalog
            .iter()
            .map(|meal| MealAvailability {
                meal: *meal,
                claimable: Self::is_claimable(meal, now),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mess::catalog::STANDARD_MEALS;
    use crate::mess::types::MealKind;

    fn meal(kind: MealKind) -> MealDefinition {
        *crate::mess::catalog::find_meal(&STANDARD_MEALS, kind).unwrap()
    }

    #[test]
    fn test_breakfast_window() {
        let breakfast = meal(MealKind::Breakfast);
        assert!(!WindowEvaluator::is_claimable(&breakfast, TimeOfDay::new(7, 19)));
        assert!(WindowEvaluator::is_claimable(&breakfast, TimeOfDay::new(7, 20)));
        assert!(WindowEvaluator::is_claimable(&breakfast, TimeOfDay::new(8, 45)));
        assert!(WindowEvaluator::is_claimable(&breakfast, TimeOfDay::new(9, 10)));
        assert!(!WindowEvaluator::is_claimable(&breakfast, TimeOfDay::new(9, 11)));
    }

    #[test]
    fn test_lunch_window() {
        let lunch = meal(MealKind::Lunch);
        assert!(!WindowEvaluator::is_claimable(&lunch, TimeOfDay::new(12, 0)));
        assert!(WindowEvaluator::is_claimable(&lunch, TimeOfDay::new(12, 20)));
        assert!(WindowEvaluator::is_claimable(&lunch, TimeOfDay::new(14, 10)));
        assert!(!WindowEvaluator::is_claimable(&lunch, TimeOfDay::new(14, 11)));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let dinner = meal(MealKind::Dinner);
        // 20:30 - 10m and 22:00 + 10m exactly
        assert!(WindowEvaluator::is_claimable(&dinner, TimeOfDay::new(20, 20)));
        assert!(WindowEvaluator::is_claimable(&dinner, TimeOfDay::new(22, 10)));
        assert!(!WindowEvaluator::is_claimable(&dinner, TimeOfDay::new(20, 19)));
        assert!(!WindowEvaluator::is_claimable(&dinner, TimeOfDay::new(22, 11)));
    }

    #[test]
    fn test_inside_official_window() {
        for m in &STANDARD_MEALS {
            assert!(WindowEvaluator::is_claimable(m, m.official_start));
            assert!(WindowEvaluator::is_claimable(m, m.official_end));
        }
    }

    #[test]
    fn test_grace_underflow_does_not_wrap() {
        let early = MealDefinition {
            sequence_index: 1,
            kind: MealKind::Breakfast,
            official_start: TimeOfDay::new(0, 5),
            official_end: TimeOfDay::new(1, 0),
            grace_minutes: 10,
        };
        // Window start is -5 minutes; midnight qualifies, late evening does not
        assert!(WindowEvaluator::is_claimable(&early, TimeOfDay::new(0, 0)));
        assert!(!WindowEvaluator::is_claimable(&early, TimeOfDay::new(23, 59)));
    }

    #[test]
    fn test_grace_overflow_does_not_wrap() {
        let late = MealDefinition {
            sequence_index: 4,
            kind: MealKind::Dinner,
            official_start: TimeOfDay::new(22, 30),
            official_end: TimeOfDay::new(23, 55),
            grace_minutes: 10,
        };
        // Window end is past midnight; 23:59 qualifies, 00:04 does not
        assert!(WindowEvaluator::is_claimable(&late, TimeOfDay::new(23, 59)));
        assert!(!WindowEvaluator::is_claimable(&late, TimeOfDay::new(0, 4)));
    }

    #[test]
    fn test_overlapping_windows_both_claimable() {
        let mut catalog = STANDARD_MEALS;
        catalog[0].grace_minutes = 300;
        catalog[1].grace_minutes = 300;
        let results = WindowEvaluator::evaluate_all(&catalog, TimeOfDay::new(10, 30));
        assert!(results[0].claimable);
        assert!(results[1].claimable);
    }

    #[test]
    fn test_evaluate_all_preserves_order() {
        let results = WindowEvaluator::evaluate_all(&STANDARD_MEALS, TimeOfDay::new(13, 0));
        assert_eq!(results.len(), STANDARD_MEALS.len());
        for (result, meal) in results.iter().zip(STANDARD_MEALS.iter()) {
            assert_eq!(result.meal.sequence_index, meal.sequence_index);
        }
        // Only lunch is open at 13:00
        let open: Vec<_> = results.iter().filter(|r| r.claimable).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].meal.kind, MealKind::Lunch);
    }

    #[test]
    fn test_deterministic() {
        let snacks = meal(MealKind::Snacks);
        let at = TimeOfDay::new(17, 15);
        assert_eq!(
            WindowEvaluator::is_claimable(&snacks, at),
            WindowEvaluator::is_claimable(&snacks, at)
        );
    }
}
