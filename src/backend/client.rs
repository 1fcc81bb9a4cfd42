use reqwest::header::COOKIE;
use tracing::debug;

use crate::{
    backend::types::{ApiResponse, ClaimRequest},
    error::{ClaimError, Result},
    mess::types::MealKind,
};

/// Name of the session cookie the backend issued at login
const SESSION_COOKIE: &str = "studentAuthToken";

/// Thin client for the mess REST backend. Sends the stored session token as
/// a cookie; obtaining the token is the login flow's job, not this tool's.
#[derive(Clone)]
pub struct MessApiClient {
    http: reqwest::Client,
    base_url: String,
    session_token: String,
}

impl MessApiClient {
    pub fn new(base_url: &str, session_token: &str, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_token: session_token.to_string(),
        })
    }

    /// Submit a claim for `meal`. The backend is the authority on eligibility
    /// and on the once-per-day rule; this call reports its verdict as-is.
    pub async fn claim_meal(&self, meal: MealKind) -> Result<ApiResponse> {
        let url = format!("{}/api/student/claim-meal", self.base_url);
        debug!("POST {} mealType={}", url, meal.api_name());

        let response = self
            .http
            .post(&url)
            .header(COOKIE, format!("{}={}", SESSION_COOKIE, self.session_token))
            .json(&ClaimRequest {
                meal_type: meal.api_name().to_string(),
            })
            .send()
            .await?;

        let body: ApiResponse = response.json().await?;

        if body.is_success() {
            return Ok(body);
        }

        let message = body.message_or("Meal cannot be claimed");
        if message.contains("already") {
            return Err(ClaimError::AlreadyClaimed(meal.to_string()));
        }
        Err(ClaimError::Backend(message))
    }
}
