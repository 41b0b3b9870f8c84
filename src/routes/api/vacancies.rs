use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::collection::{SortKey, lock};
use crate::models::vacancy::{SalaryOrder, Vacancy, compare_salary};
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub top_n: Option<usize>,
}

/// The `empty` flag is the machine-readable form of the "collection is
/// empty" notice; clients show it instead of a zero-row table.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub empty: bool,
    pub vacancies: Vec<Vacancy>,
}

impl ListResponse {
    fn of(vacancies: Vec<Vacancy>) -> Self {
        Self {
            empty: vacancies.is_empty(),
            vacancies,
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, AppError> {
    let collection = lock(&state.collection)?;
    if collection.is_empty() {
        tracing::info!("Vacancy collection is empty");
    }
    Ok(Json(ListResponse::of(collection.list(params.top_n))))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = lock(&state.collection)?.delete_by_id(&id);
    if !deleted {
        tracing::info!("Vacancy {id} not present, delete is a no-op");
    }
    Ok(Json(serde_json::json!({ "deleted": deleted })))
}

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    #[serde(default = "default_sort_key")]
    pub key: String,
    pub top_n: Option<usize>,
    #[serde(default)]
    pub persist: bool,
}

fn default_sort_key() -> String {
    "salary_from".to_string()
}

pub async fn sort(
    State(state): State<AppState>,
    Json(input): Json<SortRequest>,
) -> Result<Json<ListResponse>, AppError> {
    let key: SortKey = input.key.parse()?;
    let view = lock(&state.collection)?.sort_descending(key, input.top_n, input.persist);
    Ok(Json(ListResponse::of(view)))
}

#[derive(Debug, Deserialize)]
pub struct KeywordFilterRequest {
    pub words: Vec<String>,
    #[serde(default)]
    pub persist: bool,
}

pub async fn filter_keywords(
    State(state): State<AppState>,
    Json(input): Json<KeywordFilterRequest>,
) -> Result<Json<ListResponse>, AppError> {
    let view = lock(&state.collection)?.filter_by_keywords(&input.words, input.persist);
    Ok(Json(ListResponse::of(view)))
}

#[derive(Debug, Deserialize)]
pub struct SalaryFilterRequest {
    /// Two integers separated by a hyphen, e.g. "100000 - 150000".
    pub range: String,
    #[serde(default)]
    pub persist: bool,
}

pub async fn filter_salary(
    State(state): State<AppState>,
    Json(input): Json<SalaryFilterRequest>,
) -> Result<Json<ListResponse>, AppError> {
    let view = lock(&state.collection)?.filter_by_salary_range(&input.range, input.persist)?;
    Ok(Json(ListResponse::of(view)))
}

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    pub a: String,
    pub b: String,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub order: SalaryOrder,
}

/// Currency-gated salary comparison of two records already in the
/// collection. Mixed currencies and crossing bounds come back as
/// "incomparable" rather than forcing an ordering.
pub async fn compare(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<Json<CompareResponse>, AppError> {
    let collection = lock(&state.collection)?;
    let a = collection
        .get_by_id(&params.a)
        .ok_or_else(|| AppError::NotFound(format!("No vacancy with id {}", params.a)))?;
    let b = collection
        .get_by_id(&params.b)
        .ok_or_else(|| AppError::NotFound(format!("No vacancy with id {}", params.b)))?;

    Ok(Json(CompareResponse {
        order: compare_salary(a, b),
    }))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let mut collection = lock(&state.collection)?;
    let dropped = collection.len();
    collection.reset();
    Ok(Json(serde_json::json!({ "reset": true, "dropped": dropped })))
}
