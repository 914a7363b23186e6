//! Coverage analysis handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use coverwise_core::coverage::{
    first_name, generate_message, message_stats, to_plain_text, CoverageAnalyzer, MessageStats,
    RebuildCostBreakdown, RebuildCostEstimator,
};
use coverwise_core::{AnalysisInput, CoverageAnalysis, Error, HomeDetails};

/// Analysis with the drafted outreach message
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: CoverageAnalysis,
    pub message: String,
    pub plain_message: String,
    pub stats: MessageStats,
}

/// Request body for a rebuild cost estimate
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub home: HomeDetails,
    /// Defaults to the engine's current year
    pub target_year: Option<i32>,
    pub baseline_year: i32,
}

/// POST /api/analyze - Analyze a policy and draft the outreach message
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(input): Json<AnalysisInput>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    input
        .validate()
        .map_err(|e| AppError::bad_request(&e.to_string()))?;

    let analyzer = CoverageAnalyzer::new(state.store, &state.estimator);
    let analysis = match analyzer.analyze_checked(&input.policy, &input.home) {
        Ok(analysis) => analysis,
        Err(e @ Error::YearOutOfRange { .. }) => {
            return Err(AppError::unprocessable(&e.to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    let message = generate_message(
        first_name(&input.policy.policyholder_name),
        &input.policy,
        &analysis,
    );
    let plain_message = to_plain_text(&message);
    let stats = message_stats(&plain_message);

    Ok(Json(AnalyzeResponse {
        analysis,
        message,
        plain_message,
        stats,
    }))
}

/// POST /api/estimate - Step-by-step rebuild cost for a home
pub async fn estimate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EstimateRequest>,
) -> Result<Json<RebuildCostBreakdown>, AppError> {
    if req.home.square_footage == 0 {
        return Err(AppError::bad_request("square_footage must be positive"));
    }

    let estimator = RebuildCostEstimator::new(state.store, &state.estimator);
    let target_year = req.target_year.unwrap_or_else(|| estimator.current_year());

    Ok(Json(estimator.breakdown(&req.home, target_year, req.baseline_year)))
}
