//! Cost index handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use coverwise_core::coverage::{
    category_breakdown, combined_series, combined_series_from, series_summary, CategoryChange,
    CombinedIndexPoint, CostIndexStore, SeriesSummary,
};

/// Query parameters for the combined series
#[derive(Debug, Deserialize)]
pub struct CombinedQuery {
    /// First year to include (all years if omitted)
    pub from: Option<i32>,
}

/// Query parameters for the category breakdown
#[derive(Debug, Deserialize)]
pub struct BreakdownQuery {
    /// Baseline year (defaults to the first indexed year)
    pub from: Option<i32>,
    /// End year (defaults to the latest indexed year)
    pub to: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub materials: Vec<CategoryChange>,
    pub labor: Vec<CategoryChange>,
    pub summary: Option<SeriesSummary>,
}

/// GET /api/indices - Full cost index store
pub async fn get_indices(State(state): State<Arc<AppState>>) -> Json<&'static CostIndexStore> {
    Json(state.store)
}

/// GET /api/indices/combined - Averaged series for charts
pub async fn get_combined_series(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CombinedQuery>,
) -> Json<Vec<CombinedIndexPoint>> {
    let series = match params.from {
        Some(from) => combined_series_from(state.store, from),
        None => combined_series(state.store),
    };
    Json(series)
}

/// GET /api/indices/breakdown - Per-category change between two years
pub async fn get_breakdown(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BreakdownQuery>,
) -> Result<Json<BreakdownResponse>, AppError> {
    let store = state.store;
    let (Some(first), Some(latest)) = (store.first_year(), store.latest_year()) else {
        return Err(AppError::internal("Cost index store is empty"));
    };

    let from = params.from.unwrap_or(first);
    let to = params.to.unwrap_or(latest);
    if from > to {
        return Err(AppError::bad_request(&format!(
            "'from' ({}) must not be after 'to' ({})",
            from, to
        )));
    }

    let series: Vec<CombinedIndexPoint> = combined_series(store)
        .into_iter()
        .filter(|p| p.year >= from && p.year <= to)
        .collect();

    Ok(Json(BreakdownResponse {
        materials: category_breakdown(&store.materials, from, to),
        labor: category_breakdown(&store.labor, from, to),
        summary: series_summary(&series, from),
    }))
}
