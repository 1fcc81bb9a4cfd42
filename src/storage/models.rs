use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::mess::types::MealKind;

/// One claim this tool submitted, journaled locally. The backend keeps the
/// authoritative record; this exists for the duplicate-claim warning and for
/// `history`/`stats` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub id: i64,
    pub meal: MealKind,
    /// Token the backend returned; mess staff scan it at the counter
    pub claim_id: String,
    /// IST calendar date the claim counts against
    pub claimed_on: NaiveDate,
    pub claimed_at: DateTime<Utc>,
    pub note: String,
}

/// Aggregates over the journal
#[derive(Debug, Clone, Serialize)]
pub struct JournalStats {
    pub total_claims: u64,
    pub breakfast_claims: u64,
    pub lunch_claims: u64,
    pub snacks_claims: u64,
    pub dinner_claims: u64,
    pub first_claim_at: Option<DateTime<Utc>>,
    pub last_claim_at: Option<DateTime<Utc>>,
}
