//! Age calculation handler

use axum::{Json, extract::State};
use domain::AgeBreakdown;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::{error::ApiError, middleware::ApiJson, state::AppState};

/// Age calculation request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct CalculateAgeRequest {
    /// Date of birth in strict `YYYY-MM-DD` form
    ///
    /// A missing field is treated as an empty string so the validator
    /// answers with its "required" message instead of a parse error.
    #[serde(default)]
    #[schema(example = "1990-06-15")]
    pub dob: String,
}

/// Age calculation response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AgeResponse {
    /// Whole years of age
    pub years: i64,
    /// Months since the last birthday anniversary
    pub months: i64,
    /// Days past the last whole month
    pub days: i64,
    /// Age expressed in whole months
    pub total_months: i64,
    /// Elapsed calendar days since birth
    pub total_days: i64,
    /// Next birthday with countdown, e.g. "June 15, 2025 (365 days)"
    pub next_birthday: String,
    /// Birth date label, e.g. "June 15, 1990"
    pub dob: String,
}

impl From<AgeBreakdown> for AgeResponse {
    fn from(breakdown: AgeBreakdown) -> Self {
        Self {
            years: breakdown.years,
            months: breakdown.months,
            days: breakdown.days,
            total_months: breakdown.total_months,
            total_days: breakdown.total_days,
            next_birthday: breakdown.next_birthday,
            dob: breakdown.dob,
        }
    }
}

/// Calculate the age breakdown for a date of birth
#[utoipa::path(
    post,
    path = "/api/calculate-age",
    tag = "age",
    request_body = CalculateAgeRequest,
    responses(
        (status = 200, description = "Age breakdown", body = AgeResponse),
        (status = 400, description = "Invalid date of birth", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(dob_len = request.dob.len()))]
pub async fn calculate_age(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CalculateAgeRequest>,
) -> Result<Json<AgeResponse>, ApiError> {
    let breakdown = state.age_service.breakdown(&request.dob)?;
    Ok(Json(breakdown.into()))
}
