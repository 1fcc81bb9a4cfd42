use chrono::{DateTime, FixedOffset, Utc};
use tracing::{info, warn};

use crate::{
    backend::MessApiClient,
    claim::window::WindowEvaluator,
    error::{ClaimError, Result},
    mess::{clock, types::MealDefinition},
};

/// Result of a claim attempt
#[derive(Debug, Clone)]
pub struct ClaimOutcome {
    /// Token returned by the backend, absent on dry runs
    pub claim_id: Option<String>,
    pub meal: MealDefinition,
    pub claimed_at: DateTime<Utc>,
    pub dry_run: bool,
}

pub struct ClaimEngine {
    api_client: MessApiClient,
    dry_run: bool,
}

impl ClaimEngine {
    pub fn new(api_client: MessApiClient, dry_run: bool) -> Self {
        Self { api_client, dry_run }
    }

    /// Claim `meal` at `now` (IST).
    ///
    /// The window pre-check is advisory UX only: the backend re-validates
    /// eligibility and the once-per-day rule and its verdict wins. `force`
    /// skips the local pre-check and lets the backend decide outright.
    pub async fn claim(
        &self,
        meal: &MealDefinition,
        now: DateTime<FixedOffset>,
        force: bool,
    ) -> Result<ClaimOutcome> {
        let wall_clock = clock::ist_time_of_day(now);

        if !force && !WindowEvaluator::is_claimable(meal, wall_clock) {
            return Err(ClaimError::NotClaimable(format!(
                "{} window is {} with {} minutes grace, it is now {}",
                meal.kind,
                meal.official_timing(),
                meal.grace_minutes,
                wall_clock
            )));
        }

        if self.dry_run {
            info!("DRY RUN: would claim {} at {}", meal.kind, wall_clock);
            return Ok(ClaimOutcome {
                claim_id: None,
                meal: *meal,
                claimed_at: Utc::now(),
                dry_run: true,
            });
        }

        info!("Submitting claim for {} at {} IST", meal.kind, wall_clock);
        let response = self.api_client.claim_meal(meal.kind).await?;

        let claim_id = match response.data {
            Some(data) => data.id,
            None => {
                warn!("Backend accepted claim but returned no claim id");
                return Err(ClaimError::Backend(
                    "success response without claim data".to_string(),
                ));
            }
        };

        info!("Claim accepted for {}: {}", meal.kind, claim_id);
        Ok(ClaimOutcome {
            claim_id: Some(claim_id),
            meal: *meal,
            claimed_at: Utc::now(),
            dry_run: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mess::catalog::STANDARD_MEALS;
    use chrono::TimeZone;

    fn dry_run_engine() -> ClaimEngine {
        let client = MessApiClient::new("http://localhost:5000", "token", 5).unwrap();
        ClaimEngine::new(client, true)
    }

    fn ist(hour: u32, minute: u32) -> DateTime<FixedOffset> {
        chrono::FixedOffset::east_opt(crate::mess::clock::IST_OFFSET_SECONDS)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 10, hour, minute, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_dry_run_inside_window() {
        let lunch = &STANDARD_MEALS[1];
        let outcome = dry_run_engine().claim(lunch, ist(13, 0), false).await.unwrap();
        assert!(outcome.dry_run);
        assert!(outcome.claim_id.is_none());
        assert_eq!(outcome.meal.kind, lunch.kind);
    }

    #[tokio::test]
    async fn test_pre_check_rejects_outside_window() {
        let lunch = &STANDARD_MEALS[1];
        let err = dry_run_engine().claim(lunch, ist(10, 0), false).await;
        assert!(matches!(err, Err(ClaimError::NotClaimable(_))));
    }

    #[tokio::test]
    async fn test_force_skips_pre_check() {
        let lunch = &STANDARD_MEALS[1];
        let outcome = dry_run_engine().claim(lunch, ist(10, 0), true).await.unwrap();
        assert!(outcome.dry_run);
    }
}
