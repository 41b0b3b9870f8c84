pub mod export;
pub mod fetch;
pub mod vacancies;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::routes::AppState;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        // Fetch & accumulate
        .route("/fetch", post(fetch::fetch))
        // Collection queries and mutations
        .route("/vacancies", get(vacancies::list))
        .route("/vacancies/compare", get(vacancies::compare))
        .route("/vacancies/{id}", delete(vacancies::delete))
        .route("/vacancies/sort", post(vacancies::sort))
        .route(
            "/vacancies/filter/keywords",
            post(vacancies::filter_keywords),
        )
        .route("/vacancies/filter/salary", post(vacancies::filter_salary))
        .route("/vacancies/reset", post(vacancies::reset))
        // Flat-file persistence
        .route("/export", post(export::export))
        .route("/import", post(export::import))
        .with_state(state);

    Router::new().nest("/api/v1", api)
}
