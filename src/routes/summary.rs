use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::pipeline::{dispatch, format, summarize};
use crate::state::AppState;
use crate::types::record::WorkoutRecord;
use crate::types::workout::SummaryReport;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/workout-types", get(workout_types))
        .route("/api/summary", post(summary))
        .route("/api/summaries", post(summaries))
}

#[derive(Serialize, Deserialize)]
struct WorkoutTypeInfo {
    tag: String,
    label: String,
    fields: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct SummaryResponse {
    summary: SummaryReport,
    message: String,
}

#[derive(Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct BatchRequest {
    records: Vec<WorkoutRecord>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BatchItem {
    Ok(SummaryResponse),
    Failed { workout_type: String, error: String },
}

#[derive(Serialize, Deserialize)]
struct BatchResponse {
    results: Vec<BatchItem>,
    failed: usize,
}

async fn workout_types() -> Json<Vec<WorkoutTypeInfo>> {
    Json(
        dispatch::WORKOUT_TYPES
            .iter()
            .map(|t| WorkoutTypeInfo {
                tag: t.tag.to_string(),
                label: t.label.to_string(),
                fields: t.fields.iter().map(|f| f.to_string()).collect(),
            })
            .collect(),
    )
}

fn summarize_record(record: &WorkoutRecord) -> Result<SummaryResponse, AppError> {
    let workout = dispatch::dispatch(record)?;
    let summary = summarize::summarize(&workout)?;
    let message = format::message(&summary);
    Ok(SummaryResponse { summary, message })
}

async fn summary(Json(record): Json<WorkoutRecord>) -> Result<Json<SummaryResponse>, AppError> {
    let response = summarize_record(&record)?;

    tracing::info!(
        "Summarized {} workout ({:.3} km)",
        record.workout_type,
        response.summary.distance
    );

    Ok(Json(response))
}

async fn summaries(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let max = state.config().max_batch_size;
    if request.records.len() > max {
        return Err(AppError::BadRequest(format!(
            "Too many records: {}. Max allowed is {}",
            request.records.len(),
            max
        )));
    }

    let mut failed = 0;
    let results = request
        .records
        .iter()
        .map(|record| match summarize_record(record) {
            Ok(response) => BatchItem::Ok(response),
            Err(err) => {
                failed += 1;
                BatchItem::Failed {
                    workout_type: record.workout_type.clone(),
                    error: err.to_string(),
                }
            }
        })
        .collect();

    tracing::info!(
        "Summarized batch of {} records ({} failed)",
        request.records.len(),
        failed
    );

    Ok(Json(BatchResponse { results, failed }))
}
