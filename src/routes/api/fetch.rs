use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::collection::BulkLoadReport;
use crate::routes::AppState;
use crate::sources::runner::run_fetch;

#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    pub keyword: String,
    #[serde(default = "default_pages")]
    pub pages: u32,
}

fn default_pages() -> u32 {
    1
}

/// POST /api/v1/fetch
///
/// Pull raw vacancies from the configured source, normalize them and
/// append to the collection. Additive across calls: repeated fetches
/// accumulate, mirroring accumulation across repeated API sessions.
pub async fn fetch(
    State(state): State<AppState>,
    Json(input): Json<FetchRequest>,
) -> Result<Json<BulkLoadReport>, AppError> {
    if input.keyword.trim().is_empty() {
        return Err(AppError::BadRequest("No search keyword provided".to_string()));
    }

    let report = run_fetch(
        state.source.as_ref(),
        &state.collection,
        &input.keyword,
        input.pages,
    )
    .await?;
    Ok(Json(report))
}
