use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::collection::lock;
use crate::routes::AppState;
use crate::storage::{ExportFormat, default_path, read_records, write_records};

#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    /// "json", "csv" or "xlsx"
    pub format: String,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub path: String,
    pub records: usize,
}

/// POST /api/v1/export
///
/// Write the current collection membership to the data directory in the
/// requested format.
pub async fn export(
    State(state): State<AppState>,
    Json(input): Json<FormatRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    let format: ExportFormat = input.format.parse()?;
    let records = lock(&state.collection)?.snapshot();
    let path = default_path(&state.data_dir, format);
    write_records(&path, format, &records)?;

    tracing::info!("Exported {} vacancies to {}", records.len(), path.display());
    Ok(Json(ExportResponse {
        path: path.display().to_string(),
        records: records.len(),
    }))
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub added: usize,
    pub total: usize,
}

/// POST /api/v1/import
///
/// Read a previously exported file back and append its records. Records
/// in the file are already normalized; they bypass the normalizer.
pub async fn import(
    State(state): State<AppState>,
    Json(input): Json<FormatRequest>,
) -> Result<Json<ImportResponse>, AppError> {
    let format: ExportFormat = input.format.parse()?;
    let path = default_path(&state.data_dir, format);
    let records = read_records(&path, format)?;

    let mut collection = lock(&state.collection)?;
    let added = records.len();
    for record in records {
        collection.append(record);
    }
    Ok(Json(ImportResponse {
        added,
        total: collection.len(),
    }))
}
