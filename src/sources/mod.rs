// Vacancy source module.
// Defines the trait and one-shot runner for pluggable vacancy APIs.

pub mod headhunter;
pub mod runner;

use async_trait::async_trait;

use crate::models::raw::RawVacancy;

/// Trait that all vacancy sources must implement.
/// Each source fetches raw vacancy records from an external API; they are
/// normalized downstream, one collection insert per record.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Human-readable source name used in logs.
    fn name(&self) -> &str;

    /// Fetch up to `pages` result pages for `keyword`. Transport or decode
    /// failures end the fetch early with a warning; the caller always
    /// receives a completed (possibly empty) batch, never an error and
    /// never a partial stream.
    async fn fetch(&self, keyword: &str, pages: u32) -> Vec<RawVacancy>;
}
