pub mod api;
pub mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use crate::models::collection::SharedCollection;
use crate::sources::VacancySource;

/// Shared handler state: the one collection instance, the configured
/// vacancy source and the export directory.
#[derive(Clone)]
pub struct AppState {
    pub collection: SharedCollection,
    pub source: Arc<dyn VacancySource>,
    pub data_dir: PathBuf,
}
