use crate::config::Config;
use crate::models::collection::{BulkLoadReport, SharedCollection, VacancyCollection, lock};
use crate::sources::VacancySource;
use crate::sources::headhunter::HeadHunter;
use crate::storage::{ExportFormat, default_path, write_records};

/// Fetch raw records from the source and accumulate them into the shared
/// collection. The network round-trip happens before the lock is taken so
/// the guard is never held across an await point.
pub async fn run_fetch(
    source: &dyn VacancySource,
    collection: &SharedCollection,
    keyword: &str,
    pages: u32,
) -> Result<BulkLoadReport, crate::error::AppError> {
    let raw_records = source.fetch(keyword, pages).await;

    let report = lock(collection)?.bulk_load(raw_records);
    tracing::info!(
        "Load from '{}' completed: {} found, {} added, {} skipped",
        source.name(),
        report.found,
        report.added,
        report.skipped
    );
    Ok(report)
}

/// One-shot workflow for the `fetch` subcommand: fetch, normalize and
/// export to the data directory, then exit.
pub async fn run_once(
    config: &Config,
    keyword: &str,
    pages: u32,
    format: &str,
) -> anyhow::Result<()> {
    let format: ExportFormat = format.parse()?;
    let source = HeadHunter::new(&config.api_base_url, config.per_page)?;
    let collection = VacancyCollection::shared();

    let report = run_fetch(&source, &collection, keyword, pages).await?;
    if report.added == 0 {
        tracing::warn!("No vacancies loaded for '{keyword}', skipping export");
        return Ok(());
    }

    let records = lock(&collection)?.snapshot();
    let path = default_path(&config.data_dir, format);
    write_records(&path, format, &records)?;
    tracing::info!("Exported {} vacancies to {}", records.len(), path.display());

    Ok(())
}
