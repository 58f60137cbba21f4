//! Route handlers for the ticker query surface

use super::{ApiError, AppState};
use crate::store::Sample;
use crate::telemetry::{self, LatencyMetric};
use crate::ticker::parse_score;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

const MISSING_RANGE: &str = "Please provide since and until timestamps.";
const MISSING_TIMESTAMP: &str = "Please provide a timestamp.";

/// Assemble the query-surface router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ticker-average-price/", get(average_price))
        .route("/ticker-list/", get(ticker_list))
        .route("/ticker-price/", get(ticker_price))
        .route("/health", get(health))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct RangeParams {
    since: Option<String>,
    until: Option<String>,
    page: Option<u32>,
    page_size: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct PriceParams {
    timestamp: Option<String>,
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /ticker-average-price/?since=&until=`
///
/// Both bounds are required here, unlike the list endpoint.
async fn average_price(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Value>, ApiError> {
    let (Some(since), Some(until)) = (params.since, params.until) else {
        return Err(ApiError::BadRequest(MISSING_RANGE.to_string()));
    };

    let since = parse_score(&since)?;
    let until = parse_score(&until)?;

    let average = state.service.get_average(since, until).await?;
    Ok(Json(json!({ "average_price": average })))
}

/// `GET /ticker-list/?since=&until=&page=&page_size=`
///
/// Pagination is a presentation concern: `count` is always the full range
/// size, `results` the requested window.
async fn ticker_list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Value>, ApiError> {
    let since = params.since.as_deref().map(parse_score).transpose()?;
    let until = params.until.as_deref().map(parse_score).transpose()?;

    let started = Instant::now();
    let samples = state.service.get_list(since, until).await?;
    telemetry::record_latency(LatencyMetric::RangeQuery, started.elapsed());

    let page = params.page.unwrap_or(1).max(1) as usize;
    let page_size = params
        .page_size
        .map_or(state.default_page_size, |size| size as usize)
        .clamp(1, state.max_page_size);

    let count = samples.len();
    let results: Vec<Sample> = samples
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Ok(Json(json!({ "count": count, "results": results })))
}

/// `GET /ticker-price/?timestamp=`
///
/// A miss is a 200 with a null price, not an error.
async fn ticker_price(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PriceParams>,
) -> Result<Json<Value>, ApiError> {
    let Some(raw) = params.timestamp else {
        return Err(ApiError::BadRequest(MISSING_TIMESTAMP.to_string()));
    };

    let timestamp = parse_score(&raw)?;
    let sample = state.service.get_price(timestamp).await?;

    Ok(Json(json!({ "price": sample.map(|s| s.price) })))
}
